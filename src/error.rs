//! Error types for folio

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Not a folio directory: {0}")]
    NotFolioDirectory(PathBuf),

    #[error("Invalid entry: {0} is required")]
    InvalidEntry(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FolioError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::NotFolioDirectory(_) => 2,
            FolioError::InvalidEntry(_) | FolioError::UnknownCategory(_) => 3,
            FolioError::EntryNotFound(_) => 4,
            FolioError::Storage(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FolioError::NotFolioDirectory(path) => {
                format!(
                    "Not a folio directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'folio init' in this directory to create a new catalog\n\
                    • Navigate to an existing folio directory\n\
                    • Set FOLIO_ROOT environment variable to your catalog path",
                    path.display()
                )
            }
            FolioError::InvalidEntry(field) => {
                format!(
                    "Invalid entry: {} is required\n\n\
                    Every website needs a title, a description and a URL.\n\
                    Example:\n\
                    folio add --title 'My Blog' --url https://example.com --description 'Notes'",
                    field
                )
            }
            FolioError::UnknownCategory(label) => {
                format!(
                    "Unknown category: '{}'\n\n\
                    Valid categories: Game, MBTI\n\
                    Use 'all' to list every category",
                    label
                )
            }
            FolioError::EntryNotFound(id) => {
                format!(
                    "No website with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'folio list' to see available ids",
                    id
                )
            }
            FolioError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    The catalog was left unchanged.\n\
                    Check that the .folio/data directory is writable and the disk is not full.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
