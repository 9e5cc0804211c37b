//! Configuration management

use crate::domain::Category;
use crate::error::{FolioError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Key the snapshot is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "websites";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub default_category: Category,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            storage_key: default_storage_key(),
            default_category: Category::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .folio/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".folio").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FolioError::NotFolioDirectory(path.to_path_buf())
            } else {
                FolioError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| FolioError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .folio/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let folio_dir = path.join(".folio");
        let config_path = folio_dir.join("config.toml");

        if !folio_dir.exists() {
            fs::create_dir(&folio_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| FolioError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
