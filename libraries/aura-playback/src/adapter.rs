//! Player adapter boundary
//!
//! The external embedded player (a third-party widget loaded at runtime)
//! is driven exclusively through [`PlayerAdapter`]. The widget initializes
//! asynchronously, so [`GatedPlayer`] defers every command until the
//! underlying player signals ready - commands issued early are delayed,
//! never lost.

use crate::error::Result;
use aura_core::MediaId;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;

/// Notifications from the external player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterEvent {
    /// The loaded media reached its end
    Ended,
}

/// Boundary to the embedded media player
///
/// All methods may fail with [`crate::PlaybackError::AdapterUnavailable`]
/// when the underlying widget failed to load or was torn down; callers
/// treat that as a degraded-playback condition, not a crash.
#[async_trait]
pub trait PlayerAdapter: Send + Sync {
    /// Resolves once the underlying player is initialized
    async fn ready(&self) -> Result<()>;

    /// Load the media behind an external media identifier
    async fn load_media(&self, media_id: &MediaId) -> Result<()>;

    /// Start or resume playback
    async fn play(&self) -> Result<()>;

    /// Pause playback
    async fn pause(&self) -> Result<()>;

    /// Current playback position
    async fn position(&self) -> Result<Duration>;

    /// Duration of the loaded media
    async fn duration(&self) -> Result<Duration>;

    /// Set player volume (0-100)
    async fn set_volume(&self, level: u8) -> Result<()>;

    /// Mute the player
    async fn mute(&self) -> Result<()>;

    /// Unmute the player
    async fn unmute(&self) -> Result<()>;

    /// Subscribe to player notifications
    fn subscribe(&self) -> broadcast::Receiver<AdapterEvent>;

    /// Release the underlying player instance
    ///
    /// Must be callable regardless of readiness so teardown never leaks
    /// the widget.
    async fn shutdown(&self) -> Result<()>;
}

/// Readiness gate and load deduplication over any adapter
///
/// Every command first awaits the inner adapter's ready signal, and
/// `load_media` is a no-op when the requested id is already loaded
/// (avoids the visible flicker of a redundant reload).
pub struct GatedPlayer {
    inner: Arc<dyn PlayerAdapter>,
    loaded: Mutex<Option<MediaId>>,
}

impl GatedPlayer {
    /// Wrap an adapter
    pub fn new(inner: Arc<dyn PlayerAdapter>) -> Self {
        Self {
            inner,
            loaded: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PlayerAdapter for GatedPlayer {
    async fn ready(&self) -> Result<()> {
        self.inner.ready().await
    }

    async fn load_media(&self, media_id: &MediaId) -> Result<()> {
        if self
            .loaded
            .lock()
            .expect("loaded lock")
            .as_ref()
            .is_some_and(|id| id == media_id)
        {
            return Ok(());
        }

        self.inner.ready().await?;
        self.inner.load_media(media_id).await?;
        *self.loaded.lock().expect("loaded lock") = Some(media_id.clone());
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        self.inner.ready().await?;
        self.inner.play().await
    }

    async fn pause(&self) -> Result<()> {
        self.inner.ready().await?;
        self.inner.pause().await
    }

    async fn position(&self) -> Result<Duration> {
        self.inner.ready().await?;
        self.inner.position().await
    }

    async fn duration(&self) -> Result<Duration> {
        self.inner.ready().await?;
        self.inner.duration().await
    }

    async fn set_volume(&self, level: u8) -> Result<()> {
        self.inner.ready().await?;
        self.inner.set_volume(level).await
    }

    async fn mute(&self) -> Result<()> {
        self.inner.ready().await?;
        self.inner.mute().await
    }

    async fn unmute(&self) -> Result<()> {
        self.inner.ready().await?;
        self.inner.unmute().await
    }

    fn subscribe(&self) -> broadcast::Receiver<AdapterEvent> {
        self.inner.subscribe()
    }

    async fn shutdown(&self) -> Result<()> {
        // No ready gate: teardown must always reach the widget
        self.inner.shutdown().await
    }
}
