//! Report configuration

use clap::ValueEnum;

/// Configuration for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Songs with fewer occurrences than this are left out of the report
    pub min_occurrences: usize,

    /// Order in which songs are reported
    pub order: SongOrder,

    /// How an occurrence is resolved back to a playlist for neighbor context
    pub lookup: NeighborLookup,
}

/// Song ordering in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SongOrder {
    /// Order in which songs are first encountered in the collection
    #[default]
    FirstSeen,

    /// Sorted by `"{artist} - {title}"`
    Alphabetical,
}

/// Playlist resolution for neighbor context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum NeighborLookup {
    /// The playlist the occurrence was recorded in
    #[default]
    BySource,

    /// First playlist in the collection whose name equals the occurrence's
    /// playlist name. Ambiguous when playlist names are duplicated.
    ByName,
}

impl ReportConfig {
    /// Create a configuration reporting every song
    pub fn new() -> Self {
        Self {
            min_occurrences: 1,
            order: SongOrder::default(),
            lookup: NeighborLookup::default(),
        }
    }

    /// Set the minimum number of occurrences
    pub fn with_min_occurrences(mut self, min_occurrences: usize) -> Self {
        self.min_occurrences = min_occurrences;
        self
    }

    /// Set song ordering
    pub fn with_order(mut self, order: SongOrder) -> Self {
        self.order = order;
        self
    }

    /// Set neighbor lookup strategy
    pub fn with_lookup(mut self, lookup: NeighborLookup) -> Self {
        self.lookup = lookup;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
