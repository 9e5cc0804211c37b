//! folio - Personal website catalog
//!
//! Keeps a list of website bookmarks (title, description, URL, image and
//! category) in a local catalog directory. The whole list is stored as one
//! JSON snapshot and rewritten on every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FolioError;
