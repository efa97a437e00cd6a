//! Mixlists Report - insights into exported Spotify playlists
//!
//! This library reads a Spotify playlist export and reports where each
//! song appears across playlists, together with its neighboring tracks.

pub mod model;
pub mod report;
pub mod spotify;

pub use report::{ReportConfig, ReportGenerator};
pub use spotify::{parse_collection, LoadError};
