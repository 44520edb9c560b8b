//! AuraBeat Playback
//!
//! The playback controller and its boundary to the embedded media player.
//!
//! This crate provides:
//! - [`Controller`] - the synchronous playback state machine (current
//!   track, play/pause, circular next/prev navigation, volume/mute,
//!   browsing vs searching view state)
//! - [`PlayerAdapter`] - the trait the external embedded player is driven
//!   through, plus [`GatedPlayer`] which defers commands until the player
//!   signals ready and suppresses redundant media loads
//! - [`PlaybackDriver`] - the async orchestrator tying controller
//!   transitions to adapter side effects, progress polling and
//!   end-of-track auto-advance
//! - [`MockPlayer`] - a scripted adapter for tests and headless use
//!
//! # Architecture
//!
//! The controller is a plain state machine with no I/O: every operation
//! mutates state and records [`PlaybackEvent`]s. The driver drains those
//! events, forwards them to the UI, and reconciles the external player
//! (load/play/pause/volume). Position polling runs as an owned, cancellable
//! tokio task that stops whenever playback pauses or the driver shuts down.
//!
//! # Example
//!
//! ```rust
//! use aura_catalog::Catalog;
//! use aura_playback::{Controller, PlaybackConfig};
//!
//! let mut controller = Controller::new(Catalog::seeded(), PlaybackConfig::default());
//!
//! let track = controller.catalog().playlists()[0].tracks[0].clone();
//! controller.play_track(&track);
//! assert!(controller.is_playing());
//!
//! // Activating the current track again toggles pause
//! controller.play_track(&track);
//! assert!(!controller.is_playing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod adapter;
mod controller;
mod driver;
mod error;
mod events;
mod mock;
mod progress;
mod types;
mod volume;

pub use adapter::{AdapterEvent, GatedPlayer, PlayerAdapter};
pub use controller::{Controller, SearchResults};
pub use driver::PlaybackDriver;
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, PlaybackState};
pub use mock::MockPlayer;
pub use progress::{progress_percent, ProgressPoller};
pub use types::{PlaybackConfig, ViewMode};
pub use volume::VolumeControl;
