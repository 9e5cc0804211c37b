//! Key-value text persistence for collection snapshots

use crate::error::Result;
use std::collections::HashMap;

/// Durable medium holding one snapshot per key
///
/// Implementations only need to round-trip text. A single `write` is expected
/// to either fully replace the previous value or fail.
pub trait BackingStore {
    /// Read the value stored under `key`, or `None` if nothing was ever written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, text: &str) -> Result<()>;
}

/// In-memory backing store
#[derive(Debug, Clone, Default)]
pub struct MemoryBackingStore {
    values: HashMap<String, String>,
}

impl MemoryBackingStore {
    pub fn new() -> Self {
        MemoryBackingStore::default()
    }

    /// Start with `text` already stored under `key`
    pub fn with_entry(key: &str, text: &str) -> Self {
        let mut store = MemoryBackingStore::new();
        store.values.insert(key.to_string(), text.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl BackingStore for MemoryBackingStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, text: &str) -> Result<()> {
        self.values.insert(key.to_string(), text.to_string());
        Ok(())
    }
}
