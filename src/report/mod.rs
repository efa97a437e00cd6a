//! Playlist collection reports
//!
//! Builds the song occurrence index, resolves neighbor context and writes
//! the textual appearance report. Song search lives alongside as an
//! independent lookup over the same collection.

pub mod config;
pub mod generator;
pub mod index;
pub mod neighbors;
pub mod search;

pub use config::{NeighborLookup, ReportConfig, SongOrder};
pub use generator::{generate_report, ReportGenerator, ReportSummary};
pub use index::{build_occurrence_index, OccurrenceIndex, OccurrenceRecord, SongOccurrences};
pub use neighbors::{resolve_neighbors, NeighborContext};
pub use search::{check_for_song, find_song, SongMatch};
