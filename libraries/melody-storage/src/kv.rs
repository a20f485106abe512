//! Key-value storage abstraction
//!
//! Values are opaque strings (JSON by convention). Keys are short names like
//! `"favorites"`.

use crate::error::{Result, StorageError};
use std::collections::HashMap;

/// Durable key-value storage
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` (no-op when absent)
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

/// Keys must be usable as plain file names on every platform
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("favorites").unwrap(), None);

        store.set("favorites", "[1,2]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[1,2]"));

        store.set("favorites", "[3]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[3]"));

        store.remove("favorites").unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn key_validation() {
        assert!(validate_key("favorites").is_ok());
        assert!(validate_key("ui.theme").is_ok());
        assert!(validate_key("player_state-v2").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("with space").is_err());
    }

    #[test]
    fn memory_store_rejects_bad_keys() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.set("a/b", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
