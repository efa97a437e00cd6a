use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a playlist export. A run either loads everything or nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read playlist export {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Playlist export is malformed: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for LoadError {
    fn from(source: serde_json::Error) -> Self {
        LoadError::Malformed { source }
    }
}
