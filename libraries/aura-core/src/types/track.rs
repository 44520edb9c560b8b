/// Track domain type
use crate::types::{MediaId, TrackId};
use serde::{Deserialize, Serialize};

/// A single track in the catalog
///
/// Tracks are immutable once created. The same track may appear in any
/// number of playlists; playlists share tracks by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Display duration (`m:ss`)
    ///
    /// Purely presentational. The authoritative playback position and
    /// duration come from the player adapter at runtime.
    pub duration: String,

    /// Cover art image URL
    pub cover_art: String,

    /// External media identifier the player adapter loads
    pub media_id: MediaId,
}

impl Track {
    /// Create a new track with a generated ID
    ///
    /// The media identifier is required up front: a track without one is
    /// unplayable, so there is no way to build one by accident.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        media_id: MediaId,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration: String::new(),
            cover_art: String::new(),
            media_id,
        }
    }

    /// Set the track ID (builder style, for seeded data)
    pub fn with_id(mut self, id: TrackId) -> Self {
        self.id = id;
        self
    }

    /// Set the display duration
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Set the cover art URL
    pub fn with_cover_art(mut self, cover_art: impl Into<String>) -> Self {
        self.cover_art = cover_art.into();
        self
    }
}
