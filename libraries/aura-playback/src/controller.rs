//! Playback controller - core state machine
//!
//! Owns the catalog, the selection, the current track and the play state.
//! Every operation is a pure in-memory transition that records
//! [`PlaybackEvent`]s; the driver drains them and talks to the adapter.

use crate::{
    error::{PlaybackError, Result},
    events::{PlaybackEvent, PlaybackState},
    types::{PlaybackConfig, ViewMode},
    volume::VolumeControl,
};
use aura_catalog::{search, Catalog};
use aura_core::{Playlist, PlaylistId, Track};
use std::time::Duration;

/// Search results for the dedicated search view
#[derive(Debug)]
pub struct SearchResults<'a> {
    /// Playlists whose name matches the query
    pub playlists: Vec<&'a Playlist>,

    /// Tracks whose title, artist or album matches the query
    pub tracks: Vec<&'a Track>,
}

/// The playback state machine
///
/// Invariants:
/// - `current_track` need not belong to the selected playlist (it may have
///   been started from search results).
/// - next/prev navigation only applies when the current track is found in
///   the selected playlist, and wraps circularly in both directions.
/// - activating the track that is already current toggles play/pause; it
///   never restarts the track.
#[derive(Debug)]
pub struct Controller {
    catalog: Catalog,
    selected: Option<PlaylistId>,
    current: Option<Track>,
    playing: bool,
    volume: VolumeControl,
    view: ViewMode,
    query: String,
    poll_interval: Duration,
    pending_events: Vec<PlaybackEvent>,
}

impl Controller {
    /// Create a controller over a catalog
    ///
    /// The first playlist in catalog order starts out selected (matching
    /// the library view on startup). Nothing is playing.
    pub fn new(catalog: Catalog, config: PlaybackConfig) -> Self {
        let selected = catalog.playlists().first().map(|p| p.id.clone());
        Self {
            catalog,
            selected,
            current: None,
            playing: false,
            volume: VolumeControl::new(config.volume),
            view: ViewMode::Browsing,
            query: String::new(),
            poll_interval: config.poll_interval,
            pending_events: Vec::new(),
        }
    }

    // ===== Browsing =====

    /// Select a playlist for the library view
    ///
    /// Leaves the current track and play state untouched, and drops the UI
    /// back to browsing (clearing any active search).
    pub fn select_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        if self.catalog.get(id).is_none() {
            return Err(PlaybackError::PlaylistNotFound(id.clone()));
        }

        self.selected = Some(id.clone());
        self.view = ViewMode::Browsing;
        self.query.clear();
        self.emit_playlist_selected(id.clone());
        Ok(())
    }

    /// Accept a freshly generated playlist
    ///
    /// Prepends it to the catalog, selects it and returns to browsing.
    /// Does not start playback.
    pub fn on_playlist_generated(&mut self, playlist: Playlist) {
        let id = playlist.id.clone();
        if !self.catalog.prepend(playlist) {
            return;
        }

        self.selected = Some(id.clone());
        self.view = ViewMode::Browsing;
        self.pending_events.push(PlaybackEvent::CatalogChanged {
            playlists: self.catalog.len(),
        });
        self.emit_playlist_selected(id);
    }

    // ===== Playback control =====

    /// Activate a track
    ///
    /// If `track` is already the current track, this toggles play/pause -
    /// the only path where a second activation produces a pause. Otherwise
    /// the track becomes current, playback starts, and the selection moves
    /// to the first catalog playlist containing the track (unchanged when
    /// no playlist does), so playing from search results navigates the
    /// library to the parent playlist.
    pub fn play_track(&mut self, track: &Track) {
        if self.current.as_ref().is_some_and(|c| c.id == track.id) {
            self.playing = !self.playing;
            self.emit_state_changed();
            return;
        }

        let previous = self.current.replace(track.clone());
        self.playing = true;

        if let Some(parent) = self.catalog.parent_of(&track.id) {
            let parent_id = parent.id.clone();
            if self.selected.as_ref() != Some(&parent_id) {
                self.selected = Some(parent_id.clone());
                self.emit_playlist_selected(parent_id);
            }
        }

        self.emit_track_changed(track, previous.as_ref());
        self.emit_state_changed();
    }

    /// Flip play/pause
    ///
    /// No-op when nothing is loaded.
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.playing = !self.playing;
        self.emit_state_changed();
    }

    /// Skip to the next track in the selected playlist, wrapping at the end
    ///
    /// No-op when there is no selection or the current track is not in the
    /// selected playlist. Navigation always resumes playback.
    pub fn next_track(&mut self) {
        self.navigate(1);
    }

    /// Skip to the previous track, wrapping at the start
    pub fn prev_track(&mut self) {
        self.navigate(-1);
    }

    /// End-of-track callback from the player adapter
    ///
    /// Auto-advances exactly like [`Controller::next_track`].
    pub fn on_media_ended(&mut self) {
        self.next_track();
    }

    fn navigate(&mut self, step: isize) {
        let Some(playlist) = self.selected.as_ref().and_then(|id| self.catalog.get(id)) else {
            return;
        };
        let Some(index) = self
            .current
            .as_ref()
            .and_then(|t| playlist.track_index(&t.id))
        else {
            return;
        };

        let len = playlist.len() as isize;
        let next_index = (index as isize + step).rem_euclid(len) as usize;
        let track = playlist.tracks[next_index].clone();

        let previous = self.current.replace(track.clone());
        self.playing = true;
        self.emit_track_changed(&track, previous.as_ref());
        self.emit_state_changed();
    }

    // ===== Volume =====

    /// Set volume (0-100, clamped); nonzero levels clear mute
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.emit_volume_changed();
    }

    /// Toggle mute
    ///
    /// Muting at volume 0 first raises the level so unmuting is audible.
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    /// Current volume level (0-100)
    pub fn volume_level(&self) -> u8 {
        self.volume.level()
    }

    /// Whether audio is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Search =====

    /// Update the search query
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current search query
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Switch to the dedicated search view
    pub fn open_search(&mut self) {
        self.view = ViewMode::Searching;
    }

    /// Current view mode
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Playlists for the sidebar (full catalog on an empty query)
    pub fn sidebar_playlists(&self) -> Vec<&Playlist> {
        search::sidebar_playlists(&self.catalog, &self.query)
    }

    /// Results for the search view (empty on an empty query)
    pub fn search_results(&self) -> SearchResults<'_> {
        SearchResults {
            playlists: search::search_playlists(&self.catalog, &self.query),
            tracks: search::search_tracks(&self.catalog, &self.query),
        }
    }

    // ===== State access =====

    /// The catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The selected playlist, if any
    pub fn selected_playlist(&self) -> Option<&Playlist> {
        self.selected.as_ref().and_then(|id| self.catalog.get(id))
    }

    /// The current track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Whether playback is active
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// How often the driver polls the adapter for progress
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Coarse playback state
    pub fn state(&self) -> PlaybackState {
        match (&self.current, self.playing) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    // ===== Events =====

    /// Drain recorded events
    pub fn take_pending_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether any events are waiting to be drained
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_state_changed(&mut self) {
        let state = self.state();
        self.pending_events
            .push(PlaybackEvent::StateChanged { state });
    }

    fn emit_track_changed(&mut self, track: &Track, previous: Option<&Track>) {
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id.to_string(),
            previous_track_id: previous.map(|t| t.id.to_string()),
        });
    }

    fn emit_playlist_selected(&mut self, id: PlaylistId) {
        self.pending_events.push(PlaybackEvent::PlaylistSelected {
            playlist_id: id.to_string(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }
}
