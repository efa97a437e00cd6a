//! Internal Spotify export structures for JSON parsing
//!
//! Field names follow the export document. Spotify writes `null` for
//! missing values, so every field is optional.

use crate::model::{Playlist, Track, TrackKind};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyExport {
    #[serde(default)]
    pub playlists: Option<Vec<SpotifyPlaylist>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyPlaylist {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_modified_date: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<SpotifyItem>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyItem {
    #[serde(default)]
    pub track: Option<SpotifyTrackData>,
    #[serde(default)]
    pub episode: Option<serde_json::Value>,
    #[serde(default)]
    pub audiobook: Option<serde_json::Value>,
    #[serde(default)]
    pub local_track: Option<serde_json::Value>,
    #[serde(default)]
    pub added_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotifyTrackData {
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub album_name: Option<String>,
    #[serde(default)]
    pub track_uri: Option<String>,
}

/// Empty strings, `null` and `false` all mean "not set"
fn is_present(value: &Option<serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => false,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

impl SpotifyItem {
    fn kind(&self) -> TrackKind {
        if is_present(&self.episode) {
            TrackKind::Episode
        } else if is_present(&self.audiobook) {
            TrackKind::Audiobook
        } else if is_present(&self.local_track) {
            TrackKind::LocalTrack
        } else {
            TrackKind::Song
        }
    }

    pub fn into_track(self) -> Track {
        let kind = self.kind();
        let data = self.track.unwrap_or_default();
        Track {
            title: data.track_name.unwrap_or_default(),
            artist: data.artist_name.unwrap_or_default(),
            album: data.album_name.unwrap_or_default(),
            uri: data.track_uri.unwrap_or_default(),
            added_date: self.added_date.unwrap_or_default(),
            kind,
        }
    }
}

impl SpotifyPlaylist {
    pub fn into_playlist(self) -> Playlist {
        Playlist {
            name: self.name.unwrap_or_default(),
            last_modified: self.last_modified_date.unwrap_or_default(),
            tracks: self
                .items
                .unwrap_or_default()
                .into_iter()
                .map(SpotifyItem::into_track)
                .collect(),
        }
    }
}
