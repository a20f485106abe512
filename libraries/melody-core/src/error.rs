//! Core error types for Melody Player
use crate::types::TrackId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Melody Player
#[derive(Error, Debug)]
pub enum CoreError {
    /// A catalog must contain at least one track
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Two catalog entries share the same id
    #[error("Duplicate track id in catalog: {0}")]
    DuplicateTrackId(TrackId),

    /// A catalog entry failed validation
    #[error("Invalid track {id}: {reason}")]
    InvalidTrack { id: TrackId, reason: String },

    /// Audio device errors reported by an `AudioOutput`
    #[error("Audio device error: {0}")]
    Device(String),

    /// Persistence errors reported by a `FavoritesStore`
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid track error
    pub fn invalid_track(id: TrackId, reason: impl Into<String>) -> Self {
        Self::InvalidTrack {
            id,
            reason: reason.into(),
        }
    }

    /// Create an audio device error
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
