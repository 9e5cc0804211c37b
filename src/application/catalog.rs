//! Open an on-disk catalog

use crate::application::Store;
use crate::error::Result;
use crate::infrastructure::{CatalogRepository, Config, FileSystemRepository};

/// A discovered catalog with its store loaded
pub struct Catalog {
    pub config: Config,
    pub store: Store<FileSystemRepository>,
}

impl Catalog {
    /// Load the config of `repository` and initialize a store over its snapshot
    pub fn open(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = Store::initialize(repository, config.storage_key.clone());
        Ok(Catalog { config, store })
    }
}
