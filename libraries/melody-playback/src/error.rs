//! Error types for playback control

use melody_core::{CoreError, TrackId};
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Track id is not in the catalog
    #[error("Invalid track id: {0}")]
    InvalidTrackId(TrackId),

    /// Audio output rejected or failed a command
    #[error("Playback device error: {0}")]
    PlaybackDevice(String),

    /// Persisted favorites could not be read
    #[error("Failed to read favorites: {0}")]
    PersistenceRead(String),

    /// Favorites could not be written
    #[error("Failed to write favorites: {0}")]
    PersistenceWrite(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading or validation failed
    #[error(transparent)]
    Catalog(#[from] CoreError),
}

impl From<::config::ConfigError> for PlaybackError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
