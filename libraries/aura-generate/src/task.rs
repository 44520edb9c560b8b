//! Single-flight wrapper around a generator
//!
//! The UI allows one generation at a time: submitting disables the form
//! until the request settles, and tearing the form down discards an
//! in-flight result instead of applying it later.

use crate::error::{GeneratorError, Result};
use crate::generator::PlaylistGenerator;
use aura_core::Playlist;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Runs at most one generation request at a time.
pub struct SingleFlight {
    generator: Arc<dyn PlaylistGenerator>,
    current: Mutex<Option<JoinHandle<Result<Playlist>>>>,
}

impl SingleFlight {
    /// Wrap a generator.
    pub fn new(generator: Arc<dyn PlaylistGenerator>) -> Self {
        Self {
            generator,
            current: Mutex::new(None),
        }
    }

    /// Start a generation for the given prompt.
    ///
    /// Fails with [`GeneratorError::Busy`] while a previous request is
    /// still running.
    pub fn begin(&self, prompt: impl Into<String>) -> Result<()> {
        let mut current = self.current.lock().expect("generation lock");
        if current.as_ref().is_some_and(|h| !h.is_finished()) {
            return Err(GeneratorError::Busy);
        }

        let generator = Arc::clone(&self.generator);
        let prompt = prompt.into();
        *current = Some(tokio::spawn(async move {
            generator.generate(&prompt).await
        }));
        Ok(())
    }

    /// Whether a request is currently running.
    pub fn is_in_flight(&self) -> bool {
        self.current
            .lock()
            .expect("generation lock")
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Wait for the outstanding request and take its result.
    ///
    /// Returns `None` when nothing was in flight or the request was
    /// cancelled.
    pub async fn finish(&self) -> Option<Result<Playlist>> {
        let handle = self.current.lock().expect("generation lock").take()?;
        match handle.await {
            Ok(result) => Some(result),
            Err(_) => {
                debug!("Generation task cancelled before completion");
                None
            }
        }
    }

    /// Abort the outstanding request, discarding any result.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.lock().expect("generation lock").take() {
            handle.abort();
        }
    }
}

impl Drop for SingleFlight {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    struct SlowGenerator {
        delay: Duration,
    }

    #[async_trait]
    impl PlaylistGenerator for SlowGenerator {
        async fn generate(&self, prompt: &str) -> Result<Playlist> {
            tokio::time::sleep(self.delay).await;
            Ok(Playlist::new(format!("AI: {prompt}"), "Gemini", vec![]))
        }
    }

    fn slow(delay: Duration) -> SingleFlight {
        SingleFlight::new(Arc::new(SlowGenerator { delay }))
    }

    #[tokio::test]
    async fn second_begin_is_rejected_while_running() {
        let flight = slow(Duration::from_secs(60));
        flight.begin("first").unwrap();

        assert!(flight.is_in_flight());
        assert!(matches!(flight.begin("second"), Err(GeneratorError::Busy)));
    }

    #[tokio::test]
    async fn finish_returns_the_result() {
        let flight = slow(Duration::from_millis(1));
        flight.begin("study beats").unwrap();

        let playlist = flight.finish().await.unwrap().unwrap();
        assert_eq!(playlist.name, "AI: study beats");
        assert!(!flight.is_in_flight());
    }

    #[tokio::test]
    async fn cancel_discards_the_result() {
        let flight = slow(Duration::from_secs(60));
        flight.begin("never applied").unwrap();

        flight.cancel();

        assert!(!flight.is_in_flight());
        assert!(flight.finish().await.is_none());
    }

    #[tokio::test]
    async fn begin_after_finish_is_allowed() {
        let flight = slow(Duration::from_millis(1));
        flight.begin("one").unwrap();
        flight.finish().await.unwrap().unwrap();

        flight.begin("two").unwrap();
        let playlist = flight.finish().await.unwrap().unwrap();
        assert_eq!(playlist.name, "AI: two");
    }
}
