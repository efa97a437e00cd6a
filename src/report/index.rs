//! Song occurrence index

use crate::model::PlaylistCollection;
use std::collections::HashMap;
use std::fmt;

/// One appearance of a song in a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceRecord {
    /// Name of the containing playlist
    pub playlist_name: String,

    /// Index of the containing playlist in the collection
    pub playlist_index: usize,

    /// Position within the playlist (1-based)
    pub position: usize,

    /// Track count of the containing playlist
    pub total_tracks: usize,

    /// Last modification date of the containing playlist
    pub last_modified: String,
}

impl OccurrenceRecord {
    /// 0-based index of the track within its playlist
    pub fn track_index(&self) -> usize {
        self.position - 1
    }
}

impl fmt::Display for OccurrenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [#{}/{}] last modified: {}",
            self.playlist_name, self.position, self.total_tracks, self.last_modified
        )
    }
}

/// All occurrences of one song identity, in collection traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongOccurrences {
    pub identity: String,
    pub occurrences: Vec<OccurrenceRecord>,
}

impl SongOccurrences {
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }
}

/// Mapping from song identity to its occurrences
///
/// Songs are kept in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceIndex {
    songs: Vec<SongOccurrences>,
    slots: HashMap<String, usize>,
}

impl OccurrenceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, identity: String, record: OccurrenceRecord) {
        let slot = match self.slots.get(&identity) {
            Some(&slot) => slot,
            None => {
                let slot = self.songs.len();
                self.slots.insert(identity.clone(), slot);
                self.songs.push(SongOccurrences {
                    identity,
                    occurrences: Vec::new(),
                });
                slot
            }
        };
        self.songs[slot].occurrences.push(record);
    }

    /// Occurrences of a song, if it appears anywhere
    pub fn get(&self, identity: &str) -> Option<&[OccurrenceRecord]> {
        self.slots
            .get(identity)
            .map(|&slot| self.songs[slot].occurrences.as_slice())
    }

    /// All songs in first-seen order
    pub fn songs(&self) -> &[SongOccurrences] {
        &self.songs
    }

    /// Number of distinct song identities
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Build the song occurrence index for a collection
///
/// Every playlist slot is indexed, including episodes and local files.
/// Repeated appearances within one playlist produce separate records.
pub fn build_occurrence_index(collection: &PlaylistCollection) -> OccurrenceIndex {
    let mut index = OccurrenceIndex::new();

    for (playlist_index, playlist) in collection.playlists().iter().enumerate() {
        for (i, track) in playlist.tracks().iter().enumerate() {
            index.push(
                track.song_identity(),
                OccurrenceRecord {
                    playlist_name: playlist.name.clone(),
                    playlist_index,
                    position: i + 1,
                    total_tracks: playlist.len(),
                    last_modified: playlist.last_modified.clone(),
                },
            );
        }
    }

    log::debug!(
        "Indexed {} distinct songs across {} playlists",
        index.len(),
        collection.playlist_count()
    );

    index
}
