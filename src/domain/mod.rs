//! Domain layer - Catalog model

pub mod category;
pub mod collection;
pub mod entry;
pub mod seed;

pub use category::{Category, CategoryFilter};
pub use collection::Collection;
pub use entry::{Entry, EntryFields, EntryId};
pub use seed::seed_collection;
