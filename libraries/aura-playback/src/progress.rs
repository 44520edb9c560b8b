//! Progress polling
//!
//! While playback is active the driver polls the adapter for
//! position/duration at a fixed interval and republishes them as
//! [`PlaybackEvent::PositionUpdate`]s. The poller is an owned, cancellable
//! task: it is stopped on pause, restarted on track change, and aborted
//! unconditionally on drop so no timer outlives its owner.

use crate::{adapter::PlayerAdapter, events::PlaybackEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Percentage through the track, 0 when the duration is unknown
pub fn progress_percent(position: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        0.0
    } else {
        (position.as_secs_f32() / duration.as_secs_f32()) * 100.0
    }
}

/// Owned handle to the polling task
pub struct ProgressPoller {
    handle: JoinHandle<()>,
}

impl ProgressPoller {
    /// Spawn a poller publishing `PositionUpdate` events at `interval`
    pub fn start(
        adapter: Arc<dyn PlayerAdapter>,
        events_tx: mpsc::UnboundedSender<PlaybackEvent>,
        interval: Duration,
    ) -> Self {
        let mut ticker = tokio::time::interval(interval);
        let handle = tokio::spawn(async move {
            // The immediate first tick would race the load; skip it
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let (position, duration) =
                    match (adapter.position().await, adapter.duration().await) {
                        (Ok(p), Ok(d)) => (p, d),
                        _ => {
                            debug!("adapter stopped reporting progress, poller exiting");
                            break;
                        }
                    };

                let update = PlaybackEvent::PositionUpdate {
                    position_ms: position.as_millis() as u64,
                    duration_ms: duration.as_millis() as u64,
                };
                if events_tx.send(update).is_err() {
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Cancel the polling task
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for ProgressPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPlayer;

    #[test]
    fn percent_is_zero_without_duration() {
        assert_eq!(progress_percent(Duration::from_secs(10), Duration::ZERO), 0.0);
    }

    #[test]
    fn percent_midway() {
        let pct = progress_percent(Duration::from_secs(60), Duration::from_secs(240));
        assert!((pct - 25.0).abs() < 0.01);
    }

    #[tokio::test(start_paused = true)]
    async fn poller_publishes_updates() {
        let mock = MockPlayer::new_ready();
        mock.set_progress(Duration::from_secs(12), Duration::from_secs(240));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let poller = ProgressPoller::start(mock.clone(), tx, Duration::from_millis(500));

        tokio::time::advance(Duration::from_millis(600)).await;
        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            PlaybackEvent::PositionUpdate {
                position_ms: 12_000,
                duration_ms: 240_000,
            }
        );

        poller.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_poller_sends_nothing() {
        let mock = MockPlayer::new_ready();
        mock.set_progress(Duration::from_secs(1), Duration::from_secs(100));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let poller = ProgressPoller::start(mock, tx, Duration::from_millis(500));
        poller.stop();

        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
