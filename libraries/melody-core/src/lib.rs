//! Melody Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Melody Player.
//!
//! This crate provides the foundational building blocks shared by the storage
//! and playback crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `Catalog`
//! - **Core Traits**: `AudioOutput`, `FavoritesStore`
//! - **Library Views**: search, album/artist grouping, favorites listing
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use melody_core::{library, Catalog, TrackId};
//!
//! let catalog = Catalog::bundled().unwrap();
//! assert_eq!(catalog.first().id, TrackId::new(1));
//!
//! let hits = library::search(&catalog, "ocean");
//! assert_eq!(hits[0].title, "Ocean Breeze");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod library;
pub mod time;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use time::format_time;
pub use traits::{AudioOutput, FavoritesStore};
pub use types::{Catalog, FavoriteSet, Track, TrackId};
