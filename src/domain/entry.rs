//! Catalog entries and the field bundle used to create or edit them

use crate::domain::Category;
use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque entry identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    /// Generate a fresh time-ordered identifier
    pub fn generate() -> Self {
        EntryId(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A saved website
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Empty when the entry has no image
    #[serde(default)]
    pub image_url: String,
    pub category: Category,
}

impl Entry {
    pub fn new(id: EntryId, fields: EntryFields) -> Self {
        Entry {
            id,
            title: fields.title,
            description: fields.description,
            url: fields.url,
            image_url: fields.image_url,
            category: fields.category,
        }
    }

    /// The mutable part of this entry
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            image_url: self.image_url.clone(),
            category: self.category,
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }
}

/// Everything about an entry except its id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryFields {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
    pub category: Category,
}

impl EntryFields {
    /// Reject bundles with a blank required field
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("url", &self.url),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(FolioError::InvalidEntry(name.to_string()));
            }
        }

        Ok(())
    }
}
