//! Core traits for Melody Player
use crate::error::Result;
use crate::types::FavoriteSet;

/// Audio output trait
///
/// Implementers drive a single audio device or media element. The playback
/// controller is the only caller.
///
/// Commands are fire-and-forget: a returned error means the device rejected
/// the command outright. Failures that happen later (a `play` that cannot
/// start once the resource has been fetched, for instance) are reported
/// back to the owner as audio events, never through these return values.
///
/// Implementers also produce two notifications the owner forwards to the
/// controller: periodic position updates and a single end-of-media signal
/// per source.
pub trait AudioOutput: Send {
    /// Replace the current media source
    ///
    /// Resets the device position to zero. Does not start playback.
    fn set_source(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback of the current source
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Relocate the playback position (seconds from start)
    fn seek(&mut self, position: f64) -> Result<()>;

    /// Set output volume in `[0, 1]`
    fn set_volume(&mut self, volume: f32) -> Result<()>;
}

/// Favorites persistence trait
///
/// Implementers persist the favorite-track-id set under a single key.
pub trait FavoritesStore: Send {
    /// Load the persisted set, reporting unreadable or malformed data
    ///
    /// A missing key is not an error and yields an empty set.
    fn try_load(&self) -> Result<FavoriteSet>;

    /// Load the persisted set
    ///
    /// Never fails: corrupt data yields an empty set.
    fn load(&self) -> FavoriteSet {
        self.try_load().unwrap_or_default()
    }

    /// Replace the persisted set
    ///
    /// # Errors
    /// Returns an error if the backing storage could not be written
    fn save(&mut self, favorites: &FavoriteSet) -> Result<()>;
}
