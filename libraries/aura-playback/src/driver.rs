//! Playback driver
//!
//! Bridges the synchronous [`Controller`] to the asynchronous player
//! adapter. Every user operation runs the pure state transition under a
//! short-lived lock, drains the recorded events, forwards them to the UI
//! channel and reconciles the external player: load the current media,
//! play or pause, start/stop the progress poller, push volume changes.
//!
//! Adapter failures never fail an operation: the state transition has
//! already applied, the failure is logged and surfaced as a
//! [`PlaybackEvent::Error`], and browsing/search stay fully functional.

use crate::{
    adapter::{AdapterEvent, PlayerAdapter},
    controller::Controller,
    error::Result,
    events::{PlaybackEvent, PlaybackState},
    progress::ProgressPoller,
};
use aura_core::{MediaId, Playlist, PlaylistId, Track};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

struct Shared {
    controller: Mutex<Controller>,
    adapter: Arc<dyn PlayerAdapter>,
    events_tx: mpsc::UnboundedSender<PlaybackEvent>,
    poller: Mutex<Option<ProgressPoller>>,
    poll_interval: Duration,
}

/// Snapshot of the adapter-relevant controller state after a transition
struct Transport {
    media: Option<MediaId>,
    playing: bool,
}

impl Shared {
    /// Run a controller operation and reconcile the adapter afterwards
    async fn apply<R>(&self, op: impl FnOnce(&mut Controller) -> R) -> R {
        let (result, events, transport) = {
            let mut controller = self.controller.lock().expect("controller lock");
            let result = op(&mut controller);
            let events = controller.take_pending_events();
            let transport = Transport {
                media: controller.current_track().map(|t| t.media_id.clone()),
                playing: controller.is_playing(),
            };
            (result, events, transport)
        };

        self.perform(&events, &transport).await;
        result
    }

    async fn perform(&self, events: &[PlaybackEvent], transport: &Transport) {
        let mut track_changed = false;
        let mut state_changed = false;

        for event in events {
            match event {
                PlaybackEvent::TrackChanged { .. } => {
                    track_changed = true;
                    // Progress resets the moment the track changes, before
                    // any poll from the adapter arrives
                    let _ = self.events_tx.send(PlaybackEvent::PositionUpdate {
                        position_ms: 0,
                        duration_ms: 0,
                    });
                }
                PlaybackEvent::StateChanged { .. } => state_changed = true,
                PlaybackEvent::VolumeChanged { level, is_muted } => {
                    self.forward_volume(*level, *is_muted).await;
                }
                _ => {}
            }
            let _ = self.events_tx.send(event.clone());
        }

        if !(track_changed || state_changed) {
            return;
        }

        if let Some(media) = &transport.media {
            if track_changed {
                if let Err(e) = self.adapter.load_media(media).await {
                    self.report_adapter_error(&e);
                }
            }

            if transport.playing {
                if let Err(e) = self.adapter.play().await {
                    self.report_adapter_error(&e);
                }
                self.restart_poller(track_changed);
            } else {
                if let Err(e) = self.adapter.pause().await {
                    self.report_adapter_error(&e);
                }
                self.stop_poller();
            }
        }
    }

    async fn forward_volume(&self, level: u8, is_muted: bool) {
        if let Err(e) = self.adapter.set_volume(level).await {
            self.report_adapter_error(&e);
            return;
        }
        let result = if is_muted {
            self.adapter.mute().await
        } else {
            self.adapter.unmute().await
        };
        if let Err(e) = result {
            self.report_adapter_error(&e);
        }
    }

    /// Ensure a poller is running; on a track change the old one is
    /// replaced so it never reports the previous track's position
    fn restart_poller(&self, force: bool) {
        let mut poller = self.poller.lock().expect("poller lock");
        if poller.is_some() && !force {
            return;
        }
        *poller = Some(ProgressPoller::start(
            self.adapter.clone(),
            self.events_tx.clone(),
            self.poll_interval,
        ));
    }

    fn stop_poller(&self) {
        if let Some(poller) = self.poller.lock().expect("poller lock").take() {
            poller.stop();
        }
    }

    fn report_adapter_error(&self, error: &crate::PlaybackError) {
        warn!(%error, "player adapter command failed");
        let _ = self.events_tx.send(PlaybackEvent::Error {
            message: error.to_string(),
        });
    }
}

/// Async orchestrator over controller + adapter
///
/// Dropping the driver aborts the end-of-track listener and the progress
/// poller; call [`PlaybackDriver::shutdown`] to also release the player.
pub struct PlaybackDriver {
    shared: Arc<Shared>,
    ended_task: JoinHandle<()>,
}

impl PlaybackDriver {
    /// Create a driver and the UI event stream it publishes to
    ///
    /// The polling cadence comes from the controller's
    /// [`PlaybackConfig`](crate::PlaybackConfig).
    pub fn new(
        controller: Controller,
        adapter: Arc<dyn PlayerAdapter>,
    ) -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let poll_interval = controller.poll_interval();

        let shared = Arc::new(Shared {
            controller: Mutex::new(controller),
            adapter,
            events_tx,
            poller: Mutex::new(None),
            poll_interval,
        });

        // End-of-track auto-advance: the adapter's Ended notification is
        // exactly a next_track
        let ended_task = tokio::spawn({
            let shared = shared.clone();
            let mut notifications = shared.adapter.subscribe();
            async move {
                while let Ok(event) = notifications.recv().await {
                    match event {
                        AdapterEvent::Ended => {
                            debug!("media ended, auto-advancing");
                            shared.apply(Controller::on_media_ended).await;
                        }
                    }
                }
            }
        });

        (Self { shared, ended_task }, events_rx)
    }

    /// Select a playlist for browsing
    pub async fn select_playlist(&self, id: &PlaylistId) -> Result<()> {
        self.shared.apply(|c| c.select_playlist(id)).await
    }

    /// Activate a track (play, or toggle pause when already current)
    pub async fn play_track(&self, track: &Track) {
        self.shared.apply(|c| c.play_track(track)).await;
    }

    /// Flip play/pause
    pub async fn toggle_play_pause(&self) {
        self.shared.apply(Controller::toggle_play_pause).await;
    }

    /// Skip forward (wraps)
    pub async fn next_track(&self) {
        self.shared.apply(Controller::next_track).await;
    }

    /// Skip backward (wraps)
    pub async fn prev_track(&self) {
        self.shared.apply(Controller::prev_track).await;
    }

    /// Accept a generated playlist (prepend + select, no autoplay)
    pub async fn on_playlist_generated(&self, playlist: Playlist) {
        self.shared
            .apply(move |c| c.on_playlist_generated(playlist))
            .await;
    }

    /// Set volume (0-100)
    pub async fn set_volume(&self, level: u8) {
        self.shared.apply(|c| c.set_volume(level)).await;
    }

    /// Toggle mute
    pub async fn toggle_mute(&self) {
        self.shared.apply(Controller::toggle_mute).await;
    }

    /// Update the search query
    pub async fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.shared.apply(move |c| c.set_search_query(query)).await;
    }

    /// Switch to the search view
    pub async fn open_search(&self) {
        self.shared.apply(Controller::open_search).await;
    }

    /// Read from the controller state
    pub fn with_controller<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        let controller = self.shared.controller.lock().expect("controller lock");
        f(&controller)
    }

    /// Stop polling, stop listening and release the player
    pub async fn shutdown(self) -> Result<()> {
        self.ended_task.abort();
        self.shared.stop_poller();
        self.shared.adapter.shutdown().await
    }

    /// Convenience accessor mirroring [`Controller::state`]
    pub fn state(&self) -> PlaybackState {
        self.with_controller(Controller::state)
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        self.ended_task.abort();
        self.shared.stop_poller();
    }
}
