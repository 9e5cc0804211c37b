//! In-memory catalog with write-through persistence
//!
//! The [`Store`] owns the authoritative [`Collection`] for a session. Every
//! mutation serializes the whole candidate collection, writes it to the
//! backing store, and only then replaces the in-memory copy, so a failed
//! write leaves both sides as they were.

use crate::domain::{
    seed_collection, Category, CategoryFilter, Collection, Entry, EntryFields, EntryId,
};
use crate::error::{FolioError, Result};
use crate::infrastructure::BackingStore;

/// How [`Store::initialize`] obtained its collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A stored snapshot was decoded
    Restored,
    /// Nothing was stored; the seed collection was used
    Seeded { persisted: bool },
    /// The stored snapshot could not be read or decoded; the seed collection was used
    Recovered { reason: String, persisted: bool },
}

impl LoadOutcome {
    pub fn is_seeded(&self) -> bool {
        !matches!(self, LoadOutcome::Restored)
    }
}

pub struct Store<B: BackingStore> {
    backing: B,
    key: String,
    collection: Collection,
    outcome: LoadOutcome,
}

impl<B: BackingStore> Store<B> {
    /// Load the collection stored under `key`, seeding it when absent or unreadable.
    ///
    /// Never fails: storage problems are logged and the seed collection is
    /// used so the catalog stays usable.
    pub fn initialize(mut backing: B, key: impl Into<String>) -> Self {
        let key = key.into();

        let loaded = backing
            .read(&key)
            .and_then(|stored| {
                stored
                    .map(|text| Collection::from_snapshot(&text))
                    .transpose()
            });

        let (collection, outcome) = match loaded {
            Ok(Some(collection)) => (collection, LoadOutcome::Restored),
            Ok(None) => {
                let (seed, persisted) = Self::seed(&mut backing, &key);
                (seed, LoadOutcome::Seeded { persisted })
            }
            Err(e) => {
                tracing::warn!(
                    key = %key,
                    error = %e,
                    "failed to load stored websites, falling back to seed data"
                );
                let (seed, persisted) = Self::seed(&mut backing, &key);
                let reason = e.to_string();
                (seed, LoadOutcome::Recovered { reason, persisted })
            }
        };

        Store {
            backing,
            key,
            collection,
            outcome,
        }
    }

    fn seed(backing: &mut B, key: &str) -> (Collection, bool) {
        let seed = seed_collection();

        match seed.to_snapshot().and_then(|text| backing.write(key, &text)) {
            Ok(()) => {
                tracing::info!(key = %key, entries = seed.len(), "seeded website catalog");
                (seed, true)
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to persist seed data");
                (seed, false)
            }
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Entries matching `filter`, in insertion order
    pub fn list(&self, filter: &CategoryFilter) -> Vec<&Entry> {
        self.collection.filter(filter)
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.collection.get(id)
    }

    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        self.collection.category_counts()
    }

    /// Append a new entry with a freshly generated id
    pub fn create(&mut self, fields: EntryFields) -> Result<Entry> {
        fields.validate()?;

        let entry = Entry::new(self.fresh_id(), fields);
        let next = self.collection.with_appended(entry.clone());
        self.commit(next)?;

        tracing::debug!(id = %entry.id, "created website");
        Ok(entry)
    }

    /// Replace the fields of an existing entry, keeping its id and position
    pub fn update(&mut self, id: &EntryId, fields: EntryFields) -> Result<Entry> {
        fields.validate()?;

        let next = self
            .collection
            .with_replaced(id, fields)
            .ok_or_else(|| FolioError::EntryNotFound(id.to_string()))?;
        self.commit(next)?;

        tracing::debug!(id = %id, "updated website");
        self.collection
            .get(id)
            .cloned()
            .ok_or_else(|| FolioError::EntryNotFound(id.to_string()))
    }

    /// Remove an entry; the caller is responsible for confirmation.
    ///
    /// Returns `None` without touching storage when `id` is absent.
    pub fn delete(&mut self, id: &EntryId) -> Result<Option<Entry>> {
        let Some(removed) = self.collection.get(id).cloned() else {
            return Ok(None);
        };
        let Some(next) = self.collection.without(id) else {
            return Ok(None);
        };
        self.commit(next)?;

        tracing::debug!(id = %id, "deleted website");
        Ok(Some(removed))
    }

    fn fresh_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if !self.collection.contains(&id) {
                return id;
            }
        }
    }

    fn commit(&mut self, next: Collection) -> Result<()> {
        let text = next.to_snapshot()?;

        self.backing.write(&self.key, &text).map_err(|e| match e {
            FolioError::Storage(_) => e,
            other => FolioError::Storage(other.to_string()),
        })?;

        self.collection = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryBackingStore;

    const KEY: &str = "websites";

    /// Memory store whose writes can be switched off
    #[derive(Default)]
    struct FlakyBackingStore {
        inner: MemoryBackingStore,
        fail_writes: bool,
        fail_reads: bool,
        writes: usize,
    }

    impl BackingStore for FlakyBackingStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(FolioError::Io(std::io::Error::other("medium unavailable")));
            }
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, text: &str) -> Result<()> {
            if self.fail_writes {
                return Err(FolioError::Storage("quota exceeded".to_string()));
            }
            self.writes += 1;
            self.inner.write(key, text)
        }
    }

    fn fields(title: &str, category: Category) -> EntryFields {
        EntryFields {
            title: title.to_string(),
            description: "d".to_string(),
            url: "http://x".to_string(),
            image_url: String::new(),
            category,
        }
    }

    fn seeded_store() -> Store<MemoryBackingStore> {
        Store::initialize(MemoryBackingStore::new(), KEY)
    }

    fn stored(store: &Store<MemoryBackingStore>) -> Collection {
        Collection::from_snapshot(store.backing().get(KEY).unwrap()).unwrap()
    }

    fn ids(store: &Store<MemoryBackingStore>) -> Vec<String> {
        store
            .list(&CategoryFilter::All)
            .iter()
            .map(|e| e.id.to_string())
            .collect()
    }

    #[test]
    fn test_initialize_empty_seeds_and_persists() {
        let store = seeded_store();

        assert_eq!(store.len(), 3);
        assert_eq!(
            store.load_outcome(),
            &LoadOutcome::Seeded { persisted: true }
        );

        let categories: Vec<Category> = store
            .list(&CategoryFilter::All)
            .iter()
            .map(|e| e.category)
            .collect();
        assert_eq!(categories, vec![Category::Mbti, Category::Game, Category::Mbti]);

        assert_eq!(&stored(&store), store.collection());
    }

    #[test]
    fn test_initialize_restores_snapshot() {
        let collection = Collection::new().with_appended(Entry::new(
            EntryId::new("a"),
            fields("only", Category::Game),
        ));
        let backing = MemoryBackingStore::with_entry(KEY, &collection.to_snapshot().unwrap());

        let store = Store::initialize(backing, KEY);

        assert_eq!(store.load_outcome(), &LoadOutcome::Restored);
        assert_eq!(store.collection(), &collection);
    }

    #[test]
    fn test_initialize_restores_empty_snapshot_without_seeding() {
        let store = Store::initialize(MemoryBackingStore::with_entry(KEY, "[]"), KEY);

        assert_eq!(store.load_outcome(), &LoadOutcome::Restored);
        assert!(store.is_empty());
    }

    #[test]
    fn test_initialize_corrupt_snapshot_falls_back_to_seed() {
        let backing = MemoryBackingStore::with_entry(KEY, "{not json");

        let store = Store::initialize(backing, KEY);

        assert_eq!(store.len(), 3);
        match store.load_outcome() {
            LoadOutcome::Recovered { reason, persisted } => {
                assert!(reason.contains("JSON"));
                assert!(*persisted);
            }
            other => panic!("Expected Recovered, got {:?}", other),
        }
        // Corrupt text was overwritten with the seed snapshot
        assert_eq!(stored(&store), seed_collection());
    }

    #[test]
    fn test_initialize_read_failure_falls_back_to_seed() {
        let backing = FlakyBackingStore {
            fail_reads: true,
            ..Default::default()
        };

        let store = Store::initialize(backing, KEY);

        assert_eq!(store.len(), 3);
        assert!(store.load_outcome().is_seeded());
        assert_eq!(store.backing().writes, 1);
    }

    #[test]
    fn test_initialize_seed_write_failure_still_usable() {
        let backing = FlakyBackingStore {
            fail_writes: true,
            ..Default::default()
        };

        let store = Store::initialize(backing, KEY);

        assert_eq!(store.len(), 3);
        assert_eq!(
            store.load_outcome(),
            &LoadOutcome::Seeded { persisted: false }
        );
    }

    #[test]
    fn test_create_appends_and_persists() {
        let mut store = seeded_store();

        let new_fields = fields("X", Category::Game);
        let created = store.create(new_fields.clone()).unwrap();

        assert_eq!(store.len(), 4);
        let last = store.list(&CategoryFilter::All)[3].clone();
        assert_eq!(last, created);
        assert_eq!(last.fields(), new_fields);
        assert!(!["1", "2", "3"].contains(&last.id.as_str()));

        assert_eq!(stored(&store).len(), 4);
        assert_eq!(&stored(&store), store.collection());
    }

    #[test]
    fn test_create_rapidly_yields_unique_ids() {
        let mut store = seeded_store();

        for i in 0..200 {
            store.create(fields(&format!("site {}", i), Category::Game)).unwrap();
        }

        let ids = ids(&store);
        let unique: std::collections::HashSet<&String> = ids.iter().collect();
        assert_eq!(ids.len(), 203);
        assert_eq!(unique.len(), 203);
    }

    #[test]
    fn test_create_invalid_rejected_without_write() {
        let mut store = Store::initialize(FlakyBackingStore::default(), KEY);
        let writes_before = store.backing().writes;

        let err = store.create(fields("", Category::Game)).unwrap_err();

        assert!(matches!(err, FolioError::InvalidEntry(ref f) if f == "title"));
        assert_eq!(store.len(), 3);
        assert_eq!(store.backing().writes, writes_before);
    }

    #[test]
    fn test_create_write_failure_leaves_collection_unchanged() {
        let mut store = Store::initialize(FlakyBackingStore::default(), KEY);
        let before = store.collection().clone();

        store.backing.fail_writes = true;
        let err = store.create(fields("X", Category::Game)).unwrap_err();

        assert!(matches!(err, FolioError::Storage(_)));
        assert_eq!(store.collection(), &before);
    }

    #[test]
    fn test_update_replaces_fields_in_place() {
        let mut store = seeded_store();
        let id = EntryId::new("2");
        let mut changed = store.get(&id).unwrap().fields();
        changed.title = "New Title".to_string();

        let updated = store.update(&id, changed).unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "New Title");
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
        assert_eq!(
            store.get(&id).unwrap().description,
            seed_collection().get(&id).unwrap().description
        );
        for other in ["1", "3"] {
            let other = EntryId::new(other);
            assert_eq!(store.get(&other), seed_collection().get(&other));
        }
        assert_eq!(&stored(&store), store.collection());
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = Store::initialize(FlakyBackingStore::default(), KEY);
        let writes_before = store.backing().writes;

        let err = store
            .update(&EntryId::new("99"), fields("x", Category::Game))
            .unwrap_err();

        assert!(matches!(err, FolioError::EntryNotFound(ref id) if id == "99"));
        assert_eq!(store.backing().writes, writes_before);
    }

    #[test]
    fn test_update_invalid_rejected() {
        let mut store = seeded_store();
        let mut bad = fields("x", Category::Game);
        bad.url = " ".to_string();

        assert!(store.update(&EntryId::new("1"), bad).is_err());
        assert_eq!(store.collection(), &seed_collection());
    }

    #[test]
    fn test_update_write_failure_leaves_collection_unchanged() {
        let mut store = Store::initialize(FlakyBackingStore::default(), KEY);
        store.backing.fail_writes = true;

        let result = store.update(&EntryId::new("1"), fields("changed", Category::Game));

        assert!(result.is_err());
        assert_eq!(store.collection(), &seed_collection());
    }

    #[test]
    fn test_delete_removes_and_preserves_order() {
        let mut store = seeded_store();

        let removed = store.delete(&EntryId::new("2")).unwrap().unwrap();

        assert_eq!(removed.title, "E-commerce Store");
        assert_eq!(ids(&store), vec!["1", "3"]);
        assert_eq!(stored(&store).len(), 2);
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let mut store = Store::initialize(FlakyBackingStore::default(), KEY);

        assert!(store.delete(&EntryId::new("2")).unwrap().is_some());
        let after_first = store.collection().clone();
        let writes = store.backing().writes;

        assert!(store.delete(&EntryId::new("2")).unwrap().is_none());
        assert_eq!(store.collection(), &after_first);
        assert_eq!(store.backing().writes, writes);
    }

    #[test]
    fn test_delete_write_failure_keeps_entry() {
        let mut store = Store::initialize(FlakyBackingStore::default(), KEY);
        store.backing.fail_writes = true;

        assert!(store.delete(&EntryId::new("1")).is_err());
        assert!(store.get(&EntryId::new("1")).is_some());
    }

    #[test]
    fn test_list_filters_by_category() {
        let mut store = seeded_store();
        store.create(fields("g", Category::Game)).unwrap();

        let games: Vec<&str> = store
            .list(&CategoryFilter::Only(Category::Game))
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(games, vec!["E-commerce Store", "g"]);
    }

    #[test]
    fn test_list_empty_match() {
        let mut store = seeded_store();
        store.delete(&EntryId::new("2")).unwrap();

        assert!(store.list(&CategoryFilter::Only(Category::Game)).is_empty());
    }

    #[test]
    fn test_state_survives_reinitialize() {
        let mut store = seeded_store();
        store.create(fields("kept", Category::Mbti)).unwrap();
        store.delete(&EntryId::new("1")).unwrap();
        let expected = store.collection().clone();

        let backing = store.backing().clone();
        let reopened = Store::initialize(backing, KEY);

        assert_eq!(reopened.load_outcome(), &LoadOutcome::Restored);
        assert_eq!(reopened.collection(), &expected);
    }
}
