//! Playback events
//!
//! Event-based communication for UI synchronization. The controller
//! records events as it transitions; the driver drains them, performs the
//! matching adapter side effects and republishes them to the UI channel.

use serde::{Deserialize, Serialize};

/// Coarse playback state for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// The current track changed
    TrackChanged {
        /// ID of the new current track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Playback state changed (playing/paused/stopped)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// The selected playlist changed
    PlaylistSelected {
        /// ID of the newly selected playlist
        playlist_id: String,
    },

    /// The catalog changed (a generated playlist was prepended)
    CatalogChanged {
        /// New number of playlists in the catalog
        playlists: usize,
    },

    /// Position update (reset to zero on track change, then periodic while
    /// playing)
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration as reported by the adapter
        duration_ms: u64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// A non-fatal error occurred (e.g. the adapter went away)
    Error {
        /// Error message
        message: String,
    },
}
