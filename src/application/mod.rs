//! Application layer - Use cases and orchestration

pub mod catalog;
pub mod init;
pub mod manage_config;
pub mod store;

pub use catalog::Catalog;
pub use manage_config::ConfigService;
pub use store::{LoadOutcome, Store};
