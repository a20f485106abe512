//! Favorites persistence
//!
//! Favorites are stored as a JSON array of track ids under a single key,
//! e.g. `[1,3,7]`.

use crate::error::Result;
use crate::kv::KeyValueStore;
use melody_core::{FavoriteSet, FavoritesStore, TrackId};
use tracing::{debug, warn};

/// Default storage key for the favorites array
pub const FAVORITES_KEY: &str = "favorites";

/// `FavoritesStore` backed by any `KeyValueStore`
#[derive(Debug, Clone)]
pub struct KvFavoritesStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvFavoritesStore<S> {
    /// Use the default `"favorites"` key
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    /// Use a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    fn read(&self) -> Result<FavoriteSet> {
        match self.store.get(&self.key)? {
            Some(raw) => {
                let ids: Vec<TrackId> = serde_json::from_str(&raw)?;
                Ok(ids.into_iter().collect())
            }
            None => Ok(FavoriteSet::new()),
        }
    }

    fn try_save(&mut self, favorites: &FavoriteSet) -> Result<()> {
        let ids: Vec<TrackId> = favorites.iter().copied().collect();
        let json = serde_json::to_string(&ids)?;
        self.store.set(&self.key, &json)
    }
}

impl<S: KeyValueStore> FavoritesStore for KvFavoritesStore<S> {
    fn try_load(&self) -> melody_core::Result<FavoriteSet> {
        Ok(self.read()?)
    }

    fn load(&self) -> FavoriteSet {
        match self.read() {
            Ok(favorites) => {
                debug!("Loaded {} favorites", favorites.len());
                favorites
            }
            Err(e) => {
                warn!(
                    "Favorites under key {:?} unreadable, starting empty: {}",
                    self.key, e
                );
                FavoriteSet::new()
            }
        }
    }

    fn save(&mut self, favorites: &FavoriteSet) -> melody_core::Result<()> {
        self.try_save(favorites)?;
        debug!("Saved {} favorites", favorites.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn set(ids: &[u32]) -> FavoriteSet {
        ids.iter().copied().map(TrackId::new).collect()
    }

    #[test]
    fn absent_key_loads_empty() {
        let store = KvFavoritesStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn saves_sorted_json_array_of_numbers() {
        let mut store = KvFavoritesStore::new(MemoryStore::new());
        store.save(&set(&[7, 1, 3])).unwrap();

        assert_eq!(
            store.inner().get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[1,3,7]")
        );
        assert_eq!(store.load(), set(&[1, 3, 7]));
    }

    #[test]
    fn malformed_data_loads_empty() {
        for raw in ["not json", "{\"a\":1}", "[1,\"two\"]", "[-4]", "[1.5]", "null"] {
            let store = KvFavoritesStore::new(MemoryStore::with_entry(FAVORITES_KEY, raw));
            assert!(store.load().is_empty(), "expected empty set for {raw:?}");
            assert!(store.try_load().is_err(), "expected error for {raw:?}");
        }
    }

    #[test]
    fn duplicate_ids_collapse() {
        let store = KvFavoritesStore::new(MemoryStore::with_entry(FAVORITES_KEY, "[2,2,5]"));
        assert_eq!(store.load(), set(&[2, 5]));
    }

    #[test]
    fn custom_key_is_used() {
        let mut store = KvFavoritesStore::with_key(MemoryStore::new(), "liked");
        store.save(&set(&[4])).unwrap();

        assert_eq!(store.key(), "liked");
        assert_eq!(store.inner().get("liked").unwrap().as_deref(), Some("[4]"));
        assert_eq!(store.inner().get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn invalid_key_fails_save_but_load_stays_empty() {
        let mut store = KvFavoritesStore::with_key(MemoryStore::new(), "bad/key");
        assert!(store.save(&set(&[1])).is_err());
        assert!(store.load().is_empty());
    }
}
