//! CLI layer - Command-line interface

pub mod commands;
pub mod confirm;
pub mod output;

pub use commands::{Cli, Commands, EntryChanges};
pub use confirm::confirm;
pub use output::{format_category_counts, format_entry_detail, format_entry_list};
