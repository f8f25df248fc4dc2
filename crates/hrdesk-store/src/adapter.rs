//! Persistence adapter: JSON arrays of records over a key-value store

use crate::error::StoreError;
use crate::kv::{KeyValueStore, MemoryStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Reads, appends to and clears JSON-array collections stored under a key
///
/// `append` is a read-modify-write with no locking. Concurrent writers on the
/// same underlying store (two tabs, two processes) race and the last write
/// wins.
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Adapter over a fresh [`MemoryStore`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Load the collection under `key`, surfacing parse failures
    ///
    /// An absent key is an empty collection, not an error.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.get_item(key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Load the collection under `key`; unreadable values load as empty
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(items) => items,
            Err(err) if err.is_parse() => {
                tracing::debug!(key, error = %err, "discarding corrupt collection");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "collection unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append `item` to the end of the collection under `key`
    ///
    /// The stored collection is read back as `T` first, so a value that does
    /// not load (bad JSON or records of the wrong shape) is replaced by a
    /// one-element array.
    pub fn append<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        item: &T,
    ) -> Result<(), StoreError> {
        let existing: Vec<T> = self.load(key);
        let items: Vec<&T> = existing.iter().chain(std::iter::once(item)).collect();
        let raw = serde_json::to_string(&items).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set_item(key, &raw)
    }

    /// Remove the collection under `key`
    pub fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.store.remove_item(key)
    }
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        n: u32,
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let adapter = PersistenceAdapter::in_memory();
        let items: Vec<Entry> = adapter.load("missing");
        assert!(items.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let adapter = PersistenceAdapter::in_memory();
        adapter
            .store()
            .set_item("list", r#"[{"n":1},{"n":2}]"#)
            .unwrap();

        let before: Vec<Entry> = adapter.load("list");
        adapter.append("list", &Entry { n: 3 }).unwrap();
        let after: Vec<Entry> = adapter.load("list");

        let mut expected = before.clone();
        expected.push(Entry { n: 3 });
        assert_eq!(after, expected);
    }

    #[test]
    fn test_corrupt_values_load_empty() {
        let adapter = PersistenceAdapter::in_memory();
        for raw in ["not json", "{", "", "{\"n\":1}", "[{\"n\":\"x\"}]"] {
            adapter.store().set_item("list", raw).unwrap();
            let items: Vec<Entry> = adapter.load("list");
            assert!(items.is_empty(), "raw {raw:?}");
        }
    }

    #[test]
    fn test_try_load_reports_parse_error() {
        let adapter = PersistenceAdapter::in_memory();
        adapter.store().set_item("list", "garbage").unwrap();

        let err = adapter.try_load::<Entry>("list").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_append_over_corrupt_value_resets() {
        let adapter = PersistenceAdapter::in_memory();
        adapter.store().set_item("list", "garbage").unwrap();

        adapter.append("list", &Entry { n: 7 }).unwrap();

        let items: Vec<Entry> = adapter.load("list");
        assert_eq!(items, vec![Entry { n: 7 }]);
    }

    #[test]
    fn test_append_over_mismatched_records_resets() {
        let adapter = PersistenceAdapter::in_memory();
        for raw in [r#"[{"n":"x"}]"#, r#"[{"bogus":1}]"#, r#"[{"n":1},{"n":null}]"#] {
            adapter.store().set_item("list", raw).unwrap();

            adapter.append("list", &Entry { n: 4 }).unwrap();
            adapter.append("list", &Entry { n: 5 }).unwrap();

            let items: Vec<Entry> = adapter.load("list");
            assert_eq!(items, vec![Entry { n: 4 }, Entry { n: 5 }], "raw {raw}");
        }
    }

    #[test]
    fn test_clear_removes_key() {
        let adapter = PersistenceAdapter::in_memory();
        adapter.append("list", &Entry { n: 1 }).unwrap();

        adapter.clear("list").unwrap();

        assert_eq!(adapter.store().get_item("list").unwrap(), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let adapter = PersistenceAdapter::in_memory();
        adapter.append("list", &Entry { n: 1 }).unwrap();
        adapter.append("list", &Entry { n: 1 }).unwrap();

        let items: Vec<Entry> = adapter.load("list");
        assert_eq!(items.len(), 2);
    }
}
