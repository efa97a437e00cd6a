//! Unified data model for playlist collections
//!
//! This module defines data structures that are independent of
//! the export format the collection was loaded from.

mod collection;
mod playlist;
mod track;

pub use collection::PlaylistCollection;
pub use playlist::Playlist;
pub use track::{Track, TrackKind};
