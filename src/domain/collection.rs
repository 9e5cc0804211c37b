//! Ordered collection of entries and its snapshot form

use crate::domain::{Category, CategoryFilter, Entry, EntryFields, EntryId};
use crate::error::{FolioError, Result};
use std::collections::HashSet;

/// All entries of a catalog, in insertion order
///
/// Mutations return a new collection so the caller can decide when to commit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    /// Build a collection, rejecting duplicate ids
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(FolioError::Snapshot(format!(
                    "duplicate entry id '{}'",
                    entry.id
                )));
            }
        }
        Ok(Collection { entries })
    }

    /// Decode a snapshot produced by [`Collection::to_snapshot`]
    pub fn from_snapshot(text: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(text)?;
        Self::from_entries(entries)
    }

    /// Encode the whole collection as a JSON array
    pub fn to_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Entries matching the filter, in collection order
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(e.category))
            .collect()
    }

    /// Number of entries per category, in display order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.entries.iter().filter(|e| e.category == *c).count()))
            .collect()
    }

    /// Copy of this collection with `entry` at the end
    ///
    /// The caller guarantees the id is not already present.
    pub fn with_appended(&self, entry: Entry) -> Collection {
        debug_assert!(!self.contains(&entry.id));
        let mut entries = self.entries.clone();
        entries.push(entry);
        Collection { entries }
    }

    /// Copy with the fields of `id` replaced, or None if `id` is absent
    pub fn with_replaced(&self, id: &EntryId, fields: EntryFields) -> Option<Collection> {
        let index = self.entries.iter().position(|e| &e.id == id)?;
        let mut entries = self.entries.clone();
        entries[index] = Entry::new(id.clone(), fields);
        Some(Collection { entries })
    }

    /// Copy without `id`, or None if `id` is absent
    pub fn without(&self, id: &EntryId) -> Option<Collection> {
        if !self.contains(id) {
            return None;
        }
        let entries = self
            .entries
            .iter()
            .filter(|e| &e.id != id)
            .cloned()
            .collect();
        Some(Collection { entries })
    }
}
