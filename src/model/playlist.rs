use super::Track;
use serde::{Deserialize, Serialize};

/// Represents a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name (not guaranteed unique)
    pub name: String,

    /// Last modification date, kept as exported (display only)
    pub last_modified: String,

    /// Tracks in playlist order
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>, last_modified: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_modified: last_modified.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track to this playlist
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Builder-style variant of [`Playlist::add_track`]
    pub fn with_track(mut self, track: Track) -> Self {
        self.add_track(track);
        self
    }

    /// Tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
