//! Domain types

mod ids;
mod playlist;
mod track;

pub use ids::{MediaId, PlaylistId, TrackId};
pub use playlist::Playlist;
pub use track::Track;
