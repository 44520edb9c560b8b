//! Configuration and view-state types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which main view the UI is in
///
/// Selecting a playlist or accepting a generated playlist always drops the
/// UI back to browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Library/playlist browsing
    Browsing,

    /// Dedicated search-results view
    Searching,
}

/// Configuration for the playback controller and driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 80)
    pub volume: u8,

    /// How often the driver polls the adapter for position/duration
    /// (default: 500ms)
    pub poll_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 80,
            poll_interval: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 80);
        assert_eq!(config.poll_interval, Duration::from_millis(500));
    }
}
