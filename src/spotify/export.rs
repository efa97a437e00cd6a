//! Spotify export document loader

use super::model::{SpotifyExport, SpotifyPlaylist};
use super::LoadError;
use crate::model::{PlaylistCollection, TrackKind};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load a playlist export from disk
///
/// The file is read completely and released before decoding starts.
/// Content that is not valid UTF-8 JSON is reported as malformed.
pub fn parse_collection(path: &Path) -> Result<PlaylistCollection, LoadError> {
    log::info!("Reading Spotify playlist export from {:?}", path);
    let content = fs::read(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_collection_slice(&content)
}

/// Decode a playlist export that is already in memory
pub fn parse_collection_str(json: &str) -> Result<PlaylistCollection, LoadError> {
    parse_collection_slice(json.as_bytes())
}

/// Decode a playlist export from raw bytes
pub fn parse_collection_slice(json: &[u8]) -> Result<PlaylistCollection, LoadError> {
    let export: SpotifyExport = serde_json::from_slice(json)?;

    let collection: PlaylistCollection = export
        .playlists
        .unwrap_or_default()
        .into_iter()
        .map(SpotifyPlaylist::into_playlist)
        .collect();

    log::info!(
        "Loaded collection: {} playlists, {} entries",
        collection.playlist_count(),
        collection.track_count()
    );
    for (kind, count) in count_kinds(&collection) {
        log::debug!("  {}: {}", kind.name(), count);
    }

    Ok(collection)
}

/// Number of entries of each kind present in the collection
fn count_kinds(collection: &PlaylistCollection) -> BTreeMap<TrackKind, usize> {
    let mut counts = BTreeMap::new();
    for track in collection.playlists().iter().flat_map(|p| p.tracks()) {
        *counts.entry(track.kind).or_insert(0) += 1;
    }
    counts
}
