//! Player notifications and audio device events
//!
//! `PlayerEvent`s flow out of the controller for toast/log surfacing. They
//! are fire-and-forget and never part of player state.
//!
//! `AudioEvent`s flow in from the audio output: position updates, end of
//! media, and play failures reported after the fact.

use melody_core::TrackId;
use serde::{Deserialize, Serialize};

/// Notifications emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Play/pause switched from paused to playing
    ///
    /// Skips and track selection report `TrackChanged` instead.
    NowPlaying {
        track_id: TrackId,
        title: String,
        artist: String,
    },

    /// Current track changed
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the track that was current before
        previous_track_id: TrackId,
    },

    /// Play intent flipped
    PlayingChanged { playing: bool },

    /// Shuffle mode toggled
    ShuffleToggled { enabled: bool },

    /// Repeat mode toggled
    RepeatToggled { enabled: bool },

    /// Track added to favorites
    FavoriteAdded {
        track_id: TrackId,
        title: String,
        artist: String,
    },

    /// Track removed from favorites
    FavoriteRemoved { track_id: TrackId },

    /// Volume changed (including mute/unmute)
    VolumeChanged { volume: f32, muted: bool },

    /// Audio output failed; intent state is left as is
    DeviceError { message: String },

    /// Favorites could not be persisted; in-memory set is still current
    PersistenceError { message: String },
}

/// Notifications produced by the audio output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AudioEvent {
    /// Periodic position report, in seconds
    PositionChanged { position: f64 },

    /// Current source reached its end (fired once per source)
    Ended,

    /// A previously issued play could not start
    PlaybackFailed { message: String },
}

impl PlayerEvent {
    /// Short user-facing message, as shown in a toast
    pub fn message(&self) -> String {
        match self {
            Self::NowPlaying { title, artist, .. } => format!("Now playing: {title} by {artist}"),
            Self::TrackChanged { track_id, .. } => format!("Track changed to {track_id}"),
            Self::PlayingChanged { playing: true } => "Playing".to_string(),
            Self::PlayingChanged { playing: false } => "Paused".to_string(),
            Self::ShuffleToggled { enabled } => format!("Shuffle {}", on_off(*enabled)),
            Self::RepeatToggled { enabled } => format!("Repeat {}", on_off(*enabled)),
            Self::FavoriteAdded { title, artist, .. } => {
                format!("Added to favorites: {title} by {artist}")
            }
            Self::FavoriteRemoved { .. } => "Removed from favorites".to_string(),
            Self::VolumeChanged { muted: true, .. } => "Muted".to_string(),
            Self::VolumeChanged { volume, .. } => {
                format!("Volume {}%", (volume * 100.0).round() as u32)
            }
            Self::DeviceError { message } => format!("Playback error: {message}"),
            Self::PersistenceError { message } => format!("Could not save favorites: {message}"),
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}
