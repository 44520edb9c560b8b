//! Error types for playback

use aura_core::PlaylistId;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Playlist is not in the catalog
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// The external player is missing, not initialized, or failed
    ///
    /// Never fatal: playback controls go inert while browsing, search and
    /// generation keep working.
    #[error("Player adapter unavailable: {0}")]
    AdapterUnavailable(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
