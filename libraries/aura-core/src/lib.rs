//! AuraBeat Core
//!
//! Platform-agnostic domain types for AuraBeat.
//!
//! This crate defines the entities every other crate operates on:
//! tracks, playlists, and their typed identifiers. It is pure data -
//! the catalog store, search engine, playback controller and generator
//! client all live in their own crates and build on these types.
//!
//! # Example
//!
//! ```rust
//! use aura_core::{MediaId, Playlist, Track};
//!
//! let track = Track::new(
//!     "Midnight City",
//!     "M83",
//!     "Hurry Up, We're Dreaming",
//!     MediaId::new("dX3k_QDnzHE"),
//! )
//! .with_duration("4:04");
//!
//! let playlist = Playlist::new("Chill Vibes", "AuraBeat", vec![track]);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

pub use types::{MediaId, Playlist, PlaylistId, Track, TrackId};
