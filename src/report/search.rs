//! Song lookup by title fragment

use crate::model::PlaylistCollection;
use std::fmt;
use std::io::{self, Write};

/// A track whose title matched a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMatch {
    pub track_name: String,
    pub artist_name: String,
    pub playlist_name: String,

    /// Position within the playlist (1-based)
    pub position: usize,
}

impl fmt::Display for SongMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} is song #{} in playlist {}",
            self.track_name, self.artist_name, self.position, self.playlist_name
        )
    }
}

/// Find every track whose title contains `query`, ignoring case
///
/// Matches are returned in collection order.
pub fn find_song(query: &str, collection: &PlaylistCollection) -> Vec<SongMatch> {
    let query = query.to_lowercase();

    collection
        .playlists()
        .iter()
        .flat_map(|playlist| {
            playlist
                .tracks()
                .iter()
                .enumerate()
                .map(move |(i, track)| (playlist, i, track))
        })
        .filter(|(_, _, track)| track.title.to_lowercase().contains(&query))
        .map(|(playlist, i, track)| SongMatch {
            track_name: track.title.clone(),
            artist_name: track.artist.clone(),
            playlist_name: playlist.name.clone(),
            position: i + 1,
        })
        .collect()
}

/// Run [`find_song`] and write the matches to `out` unless `silence` is set
///
/// The search runs either way; the matches are always returned.
pub fn check_for_song<W: Write>(
    out: &mut W,
    query: &str,
    collection: &PlaylistCollection,
    silence: bool,
) -> io::Result<Vec<SongMatch>> {
    let matches = find_song(query, collection);
    log::debug!("Song search for {:?}: {} match(es)", query, matches.len());

    if !silence {
        writeln!(out, "Test for song check...")?;
        for song in &matches {
            writeln!(out, "{}", song)?;
        }
    }

    Ok(matches)
}
