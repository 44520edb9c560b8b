/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// An ordered collection of tracks
///
/// Track order is meaningful: it determines display order and next/prev
/// navigation. Playlists do not own tracks exclusively - the same track
/// may appear in several playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Display name of whoever created the playlist
    pub creator: String,

    /// Cover art image URL
    pub cover_art: String,

    /// Ordered tracks
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new playlist with a generated ID
    pub fn new(
        name: impl Into<String>,
        creator: impl Into<String>,
        tracks: Vec<Track>,
    ) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            creator: creator.into(),
            cover_art: String::new(),
            tracks,
        }
    }

    /// Set the playlist ID (builder style, for seeded data)
    pub fn with_id(mut self, id: PlaylistId) -> Self {
        self.id = id;
        self
    }

    /// Set the cover art URL
    pub fn with_cover_art(mut self, cover_art: impl Into<String>) -> Self {
        self.cover_art = cover_art.into();
        self
    }

    /// Position of a track within this playlist, by ID
    pub fn track_index(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Whether this playlist contains the track
    pub fn contains(&self, id: &TrackId) -> bool {
        self.track_index(id).is_some()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
