//! Initialize catalog use case

use crate::error::Result;
use crate::infrastructure::{CatalogRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new catalog at the specified path.
///
/// The website snapshot itself is seeded the first time the catalog is opened.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    tracing::info!(path = %path.display(), "initialized catalog");
    Ok(config)
}
