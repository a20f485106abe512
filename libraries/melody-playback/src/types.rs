//! Core types for playback control

use crate::error::{PlaybackError, Result};
use melody_core::{FavoriteSet, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file used when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "melody.toml";

/// Configuration for the playback controller
///
/// Read from the `[playback]` section of the player config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Catalog JSON file (default: bundled catalog)
    pub catalog_path: Option<PathBuf>,

    /// Track selected at startup (default: first catalog entry)
    pub default_track_id: Option<TrackId>,

    /// Initial volume (0.0-1.0, default: 0.7)
    pub volume: f32,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat state (default: off)
    pub repeat: bool,

    /// Volume restored when unmuting from zero (default: 0.5)
    pub unmute_volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_track_id: None,
            volume: 0.7,
            shuffle: false,
            repeat: false,
            unmute_volume: 0.5,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    playback: PlaybackConfig,
}

impl PlaybackConfig {
    /// Load from an optional config file and the environment
    ///
    /// Precedence (highest wins):
    /// 1) Environment variables (`MELODY__PLAYBACK__VOLUME`, ...)
    /// 2) Config file (`path`, or `melody.toml` in the working directory)
    /// 3) Struct defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(
                ::config::Environment::with_prefix("MELODY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let file: ConfigFile = settings.try_deserialize()?;
        file.playback.validate()?;
        Ok(file.playback)
    }

    /// Reject values that cannot be clamped into a usable range
    ///
    /// Finite out-of-range volumes are accepted and clamped by the controller.
    /// `unmute_volume` must be positive or unmuting would stay silent.
    pub fn validate(&self) -> Result<()> {
        if !self.volume.is_finite() {
            return Err(PlaybackError::Config(format!(
                "volume must be a finite number, got {}",
                self.volume
            )));
        }
        if !self.unmute_volume.is_finite() || self.unmute_volume <= 0.0 {
            return Err(PlaybackError::Config(format!(
                "unmute_volume must be a finite number above 0, got {}",
                self.unmute_volume
            )));
        }
        Ok(())
    }
}

/// Read-only view of player state handed to views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Current track record
    pub current_track: Track,

    /// Play intent
    pub is_playing: bool,

    /// Position in seconds, clamped to the track duration
    pub current_time: f64,

    /// `current_time / duration` in `[0, 1]`
    pub progress: f64,

    /// Volume (0.0-1.0)
    pub volume: f32,

    /// Volume is zero
    pub muted: bool,

    pub shuffle_active: bool,
    pub repeat_active: bool,

    /// Favorite track ids, sorted
    pub favorites: FavoriteSet,
}
