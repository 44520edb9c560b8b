//! Search/filter engine
//!
//! Pure functions of `(query, catalog)`: no side effects, deterministic,
//! order-preserving relative to catalog order, cheap enough to recompute
//! on every keystroke.
//!
//! Two empty-query policies coexist on purpose (see crate docs):
//! the sidebar shows the whole library, the search view shows nothing.

use crate::Catalog;
use aura_core::{Playlist, Track};

/// Case-insensitive substring match
fn matches(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn normalized(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Playlists for the sidebar
///
/// Empty or whitespace-only query yields the full catalog unfiltered.
pub fn sidebar_playlists<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Playlist> {
    match normalized(query) {
        None => catalog.playlists().iter().collect(),
        Some(q) => catalog
            .playlists()
            .iter()
            .filter(|p| matches(&p.name, &q))
            .collect(),
    }
}

/// Playlists for the dedicated search-results view
///
/// Empty or whitespace-only query yields nothing.
pub fn search_playlists<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Playlist> {
    match normalized(query) {
        None => Vec::new(),
        Some(q) => catalog
            .playlists()
            .iter()
            .filter(|p| matches(&p.name, &q))
            .collect(),
    }
}

/// Tracks for the dedicated search-results view
///
/// Matches title, artist or album across the flattened catalog. A track
/// appearing in several playlists appears once per playlist. Empty or
/// whitespace-only query yields nothing.
pub fn search_tracks<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Track> {
    match normalized(query) {
        None => Vec::new(),
        Some(q) => catalog
            .all_tracks()
            .filter(|t| matches(&t.title, &q) || matches(&t.artist, &q) || matches(&t.album, &q))
            .collect(),
    }
}
