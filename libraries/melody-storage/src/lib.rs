//! Melody Player Storage
//!
//! Durable key-value storage for user state that outlives a session.
//! Today that is the favorites set; values are JSON strings so new keys can
//! be added without schema changes.
//!
//! # Architecture
//!
//! - **`KeyValueStore`**: minimal get/set/remove over string keys
//! - **`MemoryStore`**: in-process backend for tests
//! - **`FileStore`**: one JSON file per key, atomic replace on write
//! - **`KvFavoritesStore`**: the `melody_core::FavoritesStore` implementation
//!
//! # Example
//!
//! ```rust
//! use melody_core::{FavoritesStore, TrackId};
//! use melody_storage::{KvFavoritesStore, MemoryStore};
//!
//! let mut favorites = KvFavoritesStore::new(MemoryStore::new());
//! favorites.save(&[TrackId::new(2)].into_iter().collect()).unwrap();
//! assert!(favorites.load().contains(&TrackId::new(2)));
//! ```

mod config;
mod error;
mod favorites;
mod file;
mod kv;

pub use config::{StorageConfig, DEFAULT_CONFIG_FILE};
pub use error::{Result, StorageError};
pub use favorites::{KvFavoritesStore, FAVORITES_KEY};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
