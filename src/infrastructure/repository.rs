//! File system repository

use crate::error::{FolioError, Result};
use crate::infrastructure::{BackingStore, Config};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for catalog operations
pub trait CatalogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .folio/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .folio/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .folio directory exists
    fn is_initialized(&self) -> bool;

    /// Create .folio directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of CatalogRepository
///
/// Snapshots live at `.folio/data/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover catalog root by walking up from current directory
    /// First checks FOLIO_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FOLIO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_folio_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(FolioError::Config(format!(
                    "FOLIO_ROOT is set to '{}' but no .folio directory found. \
                    Run 'folio init' in that directory or unset FOLIO_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover catalog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_folio_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(FolioError::NotFolioDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .folio directory
    fn has_folio_dir(path: &Path) -> bool {
        path.join(".folio").is_dir()
    }

    fn data_dir(&self) -> PathBuf {
        self.root.join(".folio").join("data")
    }

    /// Path of the snapshot file for `key`
    pub fn snapshot_path(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.data_dir().join(format!("{}.json", key)))
    }

    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && !key.contains(|c: char| c == '/' || c == '\\')
            && !key.chars().any(char::is_control);

        if valid {
            Ok(())
        } else {
            Err(FolioError::Config(format!("Invalid storage key: '{}'", key)))
        }
    }
}

impl CatalogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_folio_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let folio_dir = self.root.join(".folio");

        if folio_dir.exists() {
            return Err(FolioError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&folio_dir)?;
        Ok(())
    }
}

impl BackingStore for FileSystemRepository {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.snapshot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FolioError::Io(e)),
        }
    }

    /// Atomic replace: write to a temp file in the same directory, then
    /// rename over the snapshot. `fs::rename` replaces an existing file on
    /// every platform, so the old snapshot stays in place until the rename
    /// succeeds.
    fn write(&mut self, key: &str, text: &str) -> Result<()> {
        let path = self.snapshot_path(key)?;
        let storage_err =
            |e: std::io::Error| FolioError::Storage(format!("{}: {}", path.display(), e));

        let data_dir = self.data_dir();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(storage_err)?;
        }

        let tmp_path = data_dir.join(format!(".{}.folio-tmp-{}", key, std::process::id()));
        if let Err(e) = fs::write(&tmp_path, text) {
            let _ = fs::remove_file(&tmp_path);
            return Err(storage_err(e));
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(storage_err(e));
        }

        tracing::debug!(path = %path.display(), bytes = text.len(), "snapshot written");
        Ok(())
    }
}
