//! Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Audio track
///
/// Immutable catalog entry. Field names on the wire follow the catalog JSON
/// (`coverUrl`, `audioUrl`, `accentColor`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Authoritative track length in seconds
    pub duration: f64,

    /// Cover art location
    pub cover_url: String,

    /// Audio resource handed to the `AudioOutput`
    pub audio_url: String,

    /// UI accent color (e.g. `#8B5CF6`)
    pub accent_color: String,
}

impl Track {
    /// Create a new track with empty presentation fields
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            duration,
            cover_url: String::new(),
            audio_url: String::new(),
            accent_color: String::new(),
        }
    }

    /// Builder-style album setter
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Builder-style audio URL setter
    #[must_use]
    pub fn with_audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = url.into();
        self
    }

    /// Clamp a position in seconds to `[0, duration]`
    ///
    /// Non-finite input collapses to the nearest bound (`NaN` → 0).
    pub fn clamp_position(&self, seconds: f64) -> f64 {
        // f64::max/min return the non-NaN operand
        seconds.max(0.0).min(self.duration.max(0.0))
    }
}
