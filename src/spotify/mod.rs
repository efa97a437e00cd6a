//! Spotify playlist export parsing
//!
//! Reads the `Playlist1.json` style document from a Spotify data export
//! and converts it into a [`PlaylistCollection`](crate::model::PlaylistCollection).

mod error;
mod export;
mod model;

pub use error::LoadError;
pub use export::{parse_collection, parse_collection_slice, parse_collection_str};
