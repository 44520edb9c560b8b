//! Prepend-only playlist store

use crate::seed;
use aura_core::{Playlist, PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// The full collection of playlists known to the system
///
/// Insertion order matters for display: newly generated playlists are
/// prepended so they appear first. Playlist IDs are unique within the
/// catalog; a prepend with a duplicate ID is dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from an initial set of playlists
    ///
    /// Duplicate playlist IDs after the first occurrence are dropped.
    pub fn from_playlists(playlists: Vec<Playlist>) -> Self {
        let mut catalog = Self::new();
        for playlist in playlists.into_iter().rev() {
            catalog.prepend(playlist);
        }
        catalog
    }

    /// The fixed startup library
    pub fn seeded() -> Self {
        Self::from_playlists(seed::initial_playlists())
    }

    /// Insert a playlist at the front of the catalog
    ///
    /// Returns false (and drops the playlist) if its ID is already present.
    pub fn prepend(&mut self, playlist: Playlist) -> bool {
        if self.get(&playlist.id).is_some() {
            return false;
        }
        self.playlists.insert(0, playlist);
        true
    }

    /// Look up a playlist by ID
    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// First playlist in catalog order that contains the track
    pub fn parent_of(&self, track_id: &TrackId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.contains(track_id))
    }

    /// All playlists in display order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Every track across every playlist, in catalog order
    ///
    /// A track appearing in several playlists appears once per playlist.
    pub fn all_tracks(&self) -> impl Iterator<Item = &Track> {
        self.playlists.iter().flat_map(|p| p.tracks.iter())
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether the catalog holds no playlists
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::{MediaId, Track};

    fn playlist(name: &str, tracks: Vec<Track>) -> Playlist {
        Playlist::new(name, "Tester", tracks)
    }

    #[test]
    fn seeded_catalog_shape() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.all_tracks().count() >= 8);

        let names: Vec<&str> = catalog.playlists().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chill Vibes", "80s Power Hits", "Modern Pop"]);
    }

    #[test]
    fn prepend_puts_playlist_first() {
        let mut catalog = Catalog::seeded();
        let generated = playlist("AI: lofi beats", vec![]);
        let id = generated.id.clone();

        assert!(catalog.prepend(generated));
        assert_eq!(catalog.playlists()[0].id, id);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn prepend_rejects_duplicate_id() {
        let mut catalog = Catalog::new();
        let first = playlist("One", vec![]);
        let dup = Playlist::new("Two", "Tester", vec![]).with_id(first.id.clone());

        assert!(catalog.prepend(first));
        assert!(!catalog.prepend(dup));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.playlists()[0].name, "One");
    }

    #[test]
    fn parent_of_returns_first_in_catalog_order() {
        let shared = Track::new("Shared", "Artist", "Album", MediaId::new("shared"));
        let shared_id = shared.id.clone();
        let a = playlist("A", vec![shared.clone()]);
        let b = playlist("B", vec![shared]);

        let catalog = Catalog::from_playlists(vec![a, b]);
        assert_eq!(catalog.parent_of(&shared_id).unwrap().name, "A");
    }

    #[test]
    fn parent_of_missing_track_is_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.parent_of(&TrackId::new("nope")).is_none());
    }

    #[test]
    fn all_tracks_keeps_duplicates() {
        let shared = Track::new("Shared", "Artist", "Album", MediaId::new("shared"));
        let a = playlist("A", vec![shared.clone()]);
        let b = playlist("B", vec![shared]);

        let catalog = Catalog::from_playlists(vec![a, b]);
        assert_eq!(catalog.all_tracks().count(), 2);
    }
}
