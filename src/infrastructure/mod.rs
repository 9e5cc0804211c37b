//! Infrastructure layer - External I/O and persistence

pub mod backing;
pub mod config;
pub mod repository;

pub use backing::{BackingStore, MemoryBackingStore};
pub use config::Config;
pub use repository::{CatalogRepository, FileSystemRepository};
