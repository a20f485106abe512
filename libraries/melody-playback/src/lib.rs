//! Melody Player - Playback Control
//!
//! Platform-agnostic playback-state controller for Melody Player.
//!
//! This crate provides:
//! - Transport commands (play/pause, next, previous, select, seek)
//! - Shuffle (uniform, excluding the current track) and repeat-on-end
//! - Volume with mute memory
//! - Favorites with write-through persistence
//! - Notification events for toasts and logs
//!
//! # Architecture
//!
//! `melody-playback` owns player state and nothing else:
//! - Audio playback goes through `melody_core::AudioOutput`
//! - Favorites persistence goes through `melody_core::FavoritesStore`
//! - No dependency on `melody-storage`
//!
//! The owner forwards device notifications with
//! [`PlaybackController::handle_audio_event`] and drains notifications with
//! [`PlaybackController::drain_events`].
//!
//! # Example
//!
//! ```rust
//! use melody_core::{AudioOutput, Catalog, FavoriteSet, FavoritesStore, Result};
//! use melody_playback::{AudioEvent, PlaybackConfig, PlaybackController, SeededRandom};
//!
//! struct Silent;
//!
//! impl AudioOutput for Silent {
//!     fn set_source(&mut self, _url: &str) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _position: f64) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _volume: f32) -> Result<()> { Ok(()) }
//! }
//!
//! struct NoFavorites;
//!
//! impl FavoritesStore for NoFavorites {
//!     fn try_load(&self) -> Result<FavoriteSet> { Ok(FavoriteSet::new()) }
//!     fn save(&mut self, _favorites: &FavoriteSet) -> Result<()> { Ok(()) }
//! }
//!
//! let mut player = PlaybackController::new(
//!     Catalog::bundled().unwrap(),
//!     PlaybackConfig::default(),
//!     Box::new(Silent),
//!     Box::new(NoFavorites),
//! )
//! .with_random_source(SeededRandom::new(7));
//!
//! player.play_pause();
//! player.handle_audio_event(AudioEvent::Ended);
//! assert_eq!(player.current_track().title, "Midnight Drive");
//!
//! for event in player.drain_events() {
//!     println!("{}", event.message());
//! }
//! ```

mod error;
mod events;
mod manager;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::{AudioEvent, PlayerEvent};
pub use manager::PlaybackController;
pub use shuffle::{pick_shuffled_next, RandomSource, SeededRandom, ThreadRandom};
pub use types::{PlaybackConfig, PlayerSnapshot, DEFAULT_CONFIG_FILE};
pub use volume::{Volume, DEFAULT_UNMUTE_LEVEL};
