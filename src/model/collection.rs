use super::Playlist;

/// Complete exported collection: every playlist in export order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistCollection {
    playlists: Vec<Playlist>,
}

impl PlaylistCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a playlist to the end of the collection
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Get all playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Get a playlist by its position in the collection
    pub fn get(&self, index: usize) -> Option<&Playlist> {
        self.playlists.get(index)
    }

    /// First playlist with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Total number of playlist slots across all playlists
    pub fn track_count(&self) -> usize {
        self.playlists.iter().map(Playlist::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

impl From<Vec<Playlist>> for PlaylistCollection {
    fn from(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }
}

impl FromIterator<Playlist> for PlaylistCollection {
    fn from_iter<I: IntoIterator<Item = Playlist>>(iter: I) -> Self {
        Self {
            playlists: iter.into_iter().collect(),
        }
    }
}
