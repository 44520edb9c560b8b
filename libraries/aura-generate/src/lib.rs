//! AuraBeat Generate
//!
//! Playlist generation through a hosted generative model.
//!
//! One operation: turn a free-text prompt into a [`aura_core::Playlist`]
//! with 5-10 tracks, each carrying an external media identifier the player
//! adapter can load. The upstream model is invoked with a structured-output
//! schema so the response parses deterministically.
//!
//! Failures are always recoverable:
//! - [`GeneratorError::NotConfigured`] when no credential is present
//!   (surfaced as a disabled UI state, never a crash),
//! - the remaining variants for upstream/transport/parse failures (surfaced
//!   inline; the prompt is preserved by the caller so the user can retry).
//!
//! [`SingleFlight`] keeps at most one request outstanding and lets a
//! torn-down caller discard the result instead of applying it to stale
//! state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod schema;
mod task;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use generator::{GeminiGenerator, PlaylistGenerator};
pub use task::SingleFlight;
