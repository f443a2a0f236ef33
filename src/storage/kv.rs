//! Key-value stores backing the ledger
//!
//! The ledger persists through a very small interface: one string value per
//! key. `FileStore` keeps each key in its own JSON file; `MemoryStore` keeps
//! everything in a map and is what tests and embedders use.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::LedgerResult;

use super::file_io::{read_text, write_atomic};

/// Durable string storage addressed by key
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the key was never set
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        (**self).set(key, value)
    }
}

/// Stores each key as `<dir>/<key>.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file that holds `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        read_text(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        write_atomic(self.path_for(key), value.as_bytes())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one key
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("transactions").unwrap(), None);

        store.set("transactions", "[]").unwrap();
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[]"));

        store.set("transactions", "[1]").unwrap();
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get("transactions").unwrap(), None);

        store.set("transactions", r#"[{"id":1}]"#).unwrap();
        assert!(temp_dir.path().join("data").join("transactions.json").exists());
        assert_eq!(
            store.get("transactions").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
