use serde::{Deserialize, Serialize};

/// A single playlist slot with its metadata
///
/// Podcast episodes, audiobooks and local files occupy a slot just like songs;
/// their name fields are frequently empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Spotify URI (e.g. `spotify:track:...`)
    pub uri: String,

    /// Date the entry was added to its playlist, as exported
    pub added_date: String,

    /// What kind of entry this is
    pub kind: TrackKind,
}

/// Kind of playlist entry
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TrackKind {
    #[default]
    Song,
    Episode,
    Audiobook,
    LocalTrack,
}

impl Track {
    /// Create a song entry with only artist and title set
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Identity used to group occurrences: `"{artist} - {title}"`
    ///
    /// Matching is exact and case-sensitive.
    pub fn song_identity(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    /// Whether this entry is a regular song
    pub fn is_song(&self) -> bool {
        self.kind == TrackKind::Song
    }
}

impl TrackKind {
    /// Human-readable label
    pub fn name(&self) -> &'static str {
        match self {
            TrackKind::Song => "song",
            TrackKind::Episode => "episode",
            TrackKind::Audiobook => "audiobook",
            TrackKind::LocalTrack => "local track",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_identity() {
        let track = Track::new("Artist1", "Song1");
        assert_eq!(track.song_identity(), "Artist1 - Song1");
        assert!(track.is_song());
    }

    #[test]
    fn test_empty_identity() {
        let episode = Track {
            kind: TrackKind::Episode,
            ..Track::default()
        };
        assert_eq!(episode.song_identity(), " - ");
        assert!(!episode.is_song());
        assert_eq!(episode.kind.name(), "episode");
    }
}
