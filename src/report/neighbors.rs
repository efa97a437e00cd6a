//! Neighbor context for a track within its playlist

use crate::model::{Playlist, Track};

/// Tracks around a given playlist position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborContext<'a> {
    /// Playlist has fewer than two tracks
    InsufficientTracks,

    Window {
        previous: Option<&'a Track>,
        current: &'a Track,
        next: Option<&'a Track>,
    },
}

/// Resolve the track at `index` (0-based) and its immediate neighbors
///
/// # Panics
/// If the playlist has two or more tracks and `index` is out of range.
pub fn resolve_neighbors(playlist: &Playlist, index: usize) -> NeighborContext<'_> {
    let tracks = playlist.tracks();
    if tracks.len() < 2 {
        return NeighborContext::InsufficientTracks;
    }

    assert!(
        index < tracks.len(),
        "track index {} out of range for playlist {:?} with {} tracks",
        index,
        playlist.name,
        tracks.len()
    );

    NeighborContext::Window {
        previous: index.checked_sub(1).map(|i| &tracks[i]),
        current: &tracks[index],
        next: tracks.get(index + 1),
    }
}
