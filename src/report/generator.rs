//! Song appearance report
//!
//! For every song meeting the occurrence threshold, writes:
//!
//! ```text
//! 1) Artist1 - Song1 with 2 appearances:
//! A [#1/3] last modified: 2024-01-01
//! A [#3/3] last modified: 2024-01-01
//!
//! Song's neighbours in playlist: A
//! >>Artist1 - Song1<<
//! Artist2 - Song2
//!
//! ...
//! ---------------------------------------------------
//!
//! ```

use super::config::{NeighborLookup, ReportConfig, SongOrder};
use super::index::{build_occurrence_index, OccurrenceRecord, SongOccurrences};
use super::neighbors::{resolve_neighbors, NeighborContext};
use crate::model::{Playlist, PlaylistCollection};
use std::io::{self, Write};

const SEPARATOR: &str = "---------------------------------------------------";

/// Counts of what a report run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Songs that met the threshold
    pub songs_reported: usize,

    /// Occurrence lines written across all reported songs
    pub occurrences_reported: usize,

    /// Occurrences whose neighbor context could not be resolved
    pub neighbors_skipped: usize,
}

/// Writes the appearance report for a collection
pub struct ReportGenerator<'a> {
    collection: &'a PlaylistCollection,
    config: ReportConfig,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(collection: &'a PlaylistCollection, config: ReportConfig) -> Self {
        Self { collection, config }
    }

    /// Build a fresh occurrence index and write the report to `out`
    pub fn generate<W: Write>(&self, out: &mut W) -> io::Result<ReportSummary> {
        let index = build_occurrence_index(self.collection);

        let mut songs: Vec<&SongOccurrences> = index
            .songs()
            .iter()
            .filter(|song| song.count() >= self.config.min_occurrences)
            .collect();

        if self.config.order == SongOrder::Alphabetical {
            songs.sort_by(|a, b| a.identity.cmp(&b.identity));
        }

        log::info!(
            "Reporting {} of {} songs with at least {} appearance(s)",
            songs.len(),
            index.len(),
            self.config.min_occurrences
        );

        let mut summary = ReportSummary::default();
        for (i, song) in songs.into_iter().enumerate() {
            self.write_song(out, i + 1, song, &mut summary)?;
        }

        Ok(summary)
    }

    fn write_song<W: Write>(
        &self,
        out: &mut W,
        number: usize,
        song: &SongOccurrences,
        summary: &mut ReportSummary,
    ) -> io::Result<()> {
        let noun = if song.count() == 1 {
            "appearance"
        } else {
            "appearances"
        };
        writeln!(
            out,
            "{}) {} with {} {}:",
            number,
            song.identity,
            song.count(),
            noun
        )?;

        for record in &song.occurrences {
            writeln!(out, "{}", record)?;
        }
        writeln!(out)?;

        for record in &song.occurrences {
            match self.lookup_playlist(record) {
                Some(playlist) => {
                    let context = resolve_neighbors(playlist, record.track_index());
                    write_neighbors(out, playlist, context)?;
                }
                None => summary.neighbors_skipped += 1,
            }
        }

        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out)?;

        summary.songs_reported += 1;
        summary.occurrences_reported += song.count();
        Ok(())
    }

    /// Playlist to take neighbor context from, if one can be used safely
    fn lookup_playlist(&self, record: &OccurrenceRecord) -> Option<&'a Playlist> {
        let playlist = match self.config.lookup {
            NeighborLookup::BySource => self.collection.get(record.playlist_index),
            NeighborLookup::ByName => self.collection.find_by_name(&record.playlist_name),
        };

        let Some(playlist) = playlist else {
            log::warn!(
                "No playlist named {:?} found, skipping neighbor context",
                record.playlist_name
            );
            return None;
        };

        // A same-named playlist can be shorter than the one the song came from
        if playlist.len() >= 2 && record.track_index() >= playlist.len() {
            log::warn!(
                "Position {} is past the end of playlist {:?} ({} tracks), skipping neighbor context",
                record.position,
                playlist.name,
                playlist.len()
            );
            return None;
        }

        Some(playlist)
    }
}

fn write_neighbors<W: Write>(
    out: &mut W,
    playlist: &Playlist,
    context: NeighborContext<'_>,
) -> io::Result<()> {
    match context {
        NeighborContext::InsufficientTracks => {
            writeln!(out, "This playlist is either empty or it has only one song!")
        }
        NeighborContext::Window {
            previous,
            current,
            next,
        } => {
            writeln!(out, "Song's neighbours in playlist: {}", playlist.name)?;
            if let Some(previous) = previous {
                writeln!(out, "{}", previous.song_identity())?;
            }
            writeln!(out, ">>{}<<", current.song_identity())?;
            if let Some(next) = next {
                writeln!(out, "{}", next.song_identity())?;
            }
            writeln!(out)
        }
    }
}

/// Write the report for every song appearing at least `min_occurrences` times
pub fn generate_report<W: Write>(
    collection: &PlaylistCollection,
    min_occurrences: usize,
    out: &mut W,
) -> io::Result<ReportSummary> {
    let config = ReportConfig::new().with_min_occurrences(min_occurrences);
    ReportGenerator::new(collection, config).generate(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;

    fn render(collection: &PlaylistCollection, config: ReportConfig) -> String {
        let mut out = Vec::new();
        ReportGenerator::new(collection, config)
            .generate(&mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_collection() -> PlaylistCollection {
        vec![Playlist::new("A", "2024-01-01")
            .with_track(Track::new("Artist1", "Song1"))
            .with_track(Track::new("Artist2", "Song2"))
            .with_track(Track::new("Artist1", "Song1"))]
        .into()
    }

    #[test]
    fn test_repeated_song_report() {
        let output = render(
            &sample_collection(),
            ReportConfig::new().with_min_occurrences(2),
        );

        let expected = "\
1) Artist1 - Song1 with 2 appearances:
A [#1/3] last modified: 2024-01-01
A [#3/3] last modified: 2024-01-01

Song's neighbours in playlist: A
>>Artist1 - Song1<<
Artist2 - Song2

Song's neighbours in playlist: A
Artist2 - Song2
>>Artist1 - Song1<<

---------------------------------------------------

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_collection_prints_nothing() {
        let mut out = Vec::new();
        let summary = generate_report(&PlaylistCollection::new(), 1, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary, ReportSummary::default());
    }

    #[test]
    fn test_single_appearance_and_short_playlist() {
        let collection: PlaylistCollection =
            vec![Playlist::new("Solo", "2023-05-05").with_track(Track::new("Only", "One"))].into();

        let output = render(&collection, ReportConfig::new());
        let expected = "\
1) Only - One with 1 appearance:
Solo [#1/1] last modified: 2023-05-05

This playlist is either empty or it has only one song!
---------------------------------------------------

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_numbering_and_order() {
        let collection: PlaylistCollection = vec![Playlist::new("P", "d")
            .with_track(Track::new("B", "b"))
            .with_track(Track::new("A", "a"))]
        .into();

        let first_seen = render(&collection, ReportConfig::new());
        assert!(first_seen.starts_with("1) B - b with 1 appearance:"));
        assert!(first_seen.contains("2) A - a with 1 appearance:"));

        let alphabetical = render(
            &collection,
            ReportConfig::new().with_order(SongOrder::Alphabetical),
        );
        assert!(alphabetical.starts_with("1) A - a with 1 appearance:"));
        assert!(alphabetical.contains("2) B - b with 1 appearance:"));
    }

    #[test]
    fn test_threshold_filters_songs() {
        let mut out = Vec::new();
        let summary = generate_report(&sample_collection(), 3, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.songs_reported, 0);

        let mut out = Vec::new();
        let summary = generate_report(&sample_collection(), 1, &mut out).unwrap();
        assert_eq!(summary.songs_reported, 2);
        assert_eq!(summary.occurrences_reported, 3);
    }

    #[test]
    fn test_zero_threshold_reports_every_song() {
        let collection = sample_collection();
        assert_eq!(
            render(&collection, ReportConfig::new().with_min_occurrences(0)),
            render(&collection, ReportConfig::new().with_min_occurrences(1))
        );
    }

    #[test]
    fn test_duplicate_names_by_source() {
        let collection: PlaylistCollection = vec![
            Playlist::new("Dup", "1")
                .with_track(Track::new("X", "x"))
                .with_track(Track::new("Y", "y")),
            Playlist::new("Dup", "2")
                .with_track(Track::new("Z", "z"))
                .with_track(Track::new("W", "w"))
                .with_track(Track::new("Target", "t")),
        ]
        .into();

        let output = render(&collection, ReportConfig::new().with_min_occurrences(1));
        assert!(output.contains("W - w\n>>Target - t<<\n"));
    }

    #[test]
    fn test_duplicate_names_by_name_uses_first_match() {
        let collection: PlaylistCollection = vec![
            Playlist::new("Dup", "1")
                .with_track(Track::new("X", "x"))
                .with_track(Track::new("Y", "y")),
            Playlist::new("Dup", "2")
                .with_track(Track::new("Y", "y"))
                .with_track(Track::new("W", "w"))
                .with_track(Track::new("Target", "t")),
        ]
        .into();

        let mut out = Vec::new();
        let summary = ReportGenerator::new(
            &collection,
            ReportConfig::new().with_lookup(NeighborLookup::ByName),
        )
        .generate(&mut out)
        .unwrap();
        let output = String::from_utf8(out).unwrap();

        // "W - w" sits at position 2 of the second playlist, resolved in the first
        assert!(output.contains(
            "3) W - w with 1 appearance:\nDup [#2/3] last modified: 2\n\n\
             Song's neighbours in playlist: Dup\nX - x\n>>Y - y<<\n"
        ));
        // "Target - t" at position 3 does not exist in the first playlist
        assert_eq!(summary.neighbors_skipped, 1);
        assert!(output.contains("1 appearance:\nDup [#3/3] last modified: 2\n\n-----"));
    }
}
