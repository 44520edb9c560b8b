//! Scripted player adapter
//!
//! A stand-in for the real embedded widget: records every command, holds
//! scripted position/duration, and lets tests flip readiness, trigger
//! end-of-track and simulate an unavailable player.

use crate::{
    adapter::{AdapterEvent, PlayerAdapter},
    error::{PlaybackError, Result},
};
use aura_core::MediaId;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{broadcast, watch};

#[derive(Debug, Default)]
struct MockState {
    loaded: Option<MediaId>,
    playing: bool,
    position: Duration,
    duration: Duration,
    volume: u8,
    muted: bool,
    unavailable: bool,
    shut_down: bool,
    commands: Vec<String>,
}

/// Scripted [`PlayerAdapter`] implementation
pub struct MockPlayer {
    state: Mutex<MockState>,
    ready_tx: watch::Sender<bool>,
    events_tx: broadcast::Sender<AdapterEvent>,
}

impl MockPlayer {
    fn with_ready(ready: bool) -> Arc<Self> {
        let (ready_tx, _) = watch::channel(ready);
        let (events_tx, _) = broadcast::channel(16);
        Arc::new(Self {
            state: Mutex::new(MockState::default()),
            ready_tx,
            events_tx,
        })
    }

    /// A player that is ready immediately
    pub fn new_ready() -> Arc<Self> {
        Self::with_ready(true)
    }

    /// A player that stays initializing until [`MockPlayer::make_ready`]
    pub fn new_deferred() -> Arc<Self> {
        Self::with_ready(false)
    }

    /// Signal that initialization finished
    pub fn make_ready(&self) {
        let _ = self.ready_tx.send(true);
    }

    /// Script the reported position and duration
    pub fn set_progress(&self, position: Duration, duration: Duration) {
        let mut state = self.state.lock().expect("mock lock");
        state.position = position;
        state.duration = duration;
    }

    /// Simulate the loaded media reaching its end
    pub fn finish_track(&self) {
        let _ = self.events_tx.send(AdapterEvent::Ended);
    }

    /// Make every subsequent command fail with `AdapterUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().expect("mock lock").unavailable = unavailable;
    }

    /// Commands the adapter received, in order
    pub fn commands(&self) -> Vec<String> {
        self.state.lock().expect("mock lock").commands.clone()
    }

    /// The currently loaded media id
    pub fn loaded(&self) -> Option<MediaId> {
        self.state.lock().expect("mock lock").loaded.clone()
    }

    /// Whether the player believes it is playing
    pub fn is_playing(&self) -> bool {
        self.state.lock().expect("mock lock").playing
    }

    /// The last volume the player was given
    pub fn volume(&self) -> u8 {
        self.state.lock().expect("mock lock").volume
    }

    /// Whether the player is muted
    pub fn is_muted(&self) -> bool {
        self.state.lock().expect("mock lock").muted
    }

    /// Whether the player instance was released
    pub fn is_shut_down(&self) -> bool {
        self.state.lock().expect("mock lock").shut_down
    }

    fn command(&self, name: impl Into<String>) -> Result<std::sync::MutexGuard<'_, MockState>> {
        let mut state = self.state.lock().expect("mock lock");
        if state.unavailable {
            return Err(PlaybackError::AdapterUnavailable(
                "mock player unavailable".into(),
            ));
        }
        let name = name.into();
        state.commands.push(name);
        Ok(state)
    }
}

#[async_trait]
impl PlayerAdapter for MockPlayer {
    async fn ready(&self) -> Result<()> {
        let mut rx = self.ready_tx.subscribe();
        while !*rx.borrow() {
            rx.changed()
                .await
                .map_err(|_| PlaybackError::AdapterUnavailable("player torn down".into()))?;
        }
        Ok(())
    }

    async fn load_media(&self, media_id: &MediaId) -> Result<()> {
        let mut state = self.command(format!("load {media_id}"))?;
        state.loaded = Some(media_id.clone());
        state.position = Duration::ZERO;
        state.duration = Duration::ZERO;
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        let mut state = self.command("play")?;
        state.playing = true;
        Ok(())
    }

    async fn pause(&self) -> Result<()> {
        let mut state = self.command("pause")?;
        state.playing = false;
        Ok(())
    }

    async fn position(&self) -> Result<Duration> {
        let state = self.state.lock().expect("mock lock");
        if state.unavailable {
            return Err(PlaybackError::AdapterUnavailable(
                "mock player unavailable".into(),
            ));
        }
        Ok(state.position)
    }

    async fn duration(&self) -> Result<Duration> {
        let state = self.state.lock().expect("mock lock");
        if state.unavailable {
            return Err(PlaybackError::AdapterUnavailable(
                "mock player unavailable".into(),
            ));
        }
        Ok(state.duration)
    }

    async fn set_volume(&self, level: u8) -> Result<()> {
        let mut state = self.command(format!("volume {level}"))?;
        state.volume = level;
        Ok(())
    }

    async fn mute(&self) -> Result<()> {
        let mut state = self.command("mute")?;
        state.muted = true;
        Ok(())
    }

    async fn unmute(&self) -> Result<()> {
        let mut state = self.command("unmute")?;
        state.muted = false;
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.events_tx.subscribe()
    }

    async fn shutdown(&self) -> Result<()> {
        let mut state = self.state.lock().expect("mock lock");
        state.shut_down = true;
        state.playing = false;
        state.commands.push("shutdown".into());
        Ok(())
    }
}
