//! AuraBeat Catalog
//!
//! The catalog store and the search/filter engine.
//!
//! The catalog is an ordered, prepend-only collection of playlists: it is
//! seeded once at startup and grows only when a generated playlist is
//! prepended. Nothing is ever removed or mutated in place.
//!
//! Search is a set of pure functions over `(query, catalog)`. There are
//! deliberately two empty-query policies:
//! - [`search::sidebar_playlists`] returns the full catalog on an empty
//!   query (the sidebar always shows the library),
//! - [`search::search_playlists`] / [`search::search_tracks`] return
//!   nothing on an empty query (the search view shows results only once
//!   the user has typed something).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
pub mod search;
mod seed;

pub use catalog::Catalog;
