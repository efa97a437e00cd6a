use anyhow::{Context, Result};
use clap::Parser;
use mixlists_report::report::{check_for_song, NeighborLookup, SongOrder};
use mixlists_report::{ReportConfig, ReportGenerator};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mixlists-report")]
#[command(about = "Report where songs appear across exported Spotify playlists", long_about = None)]
struct Args {
    /// Path to the Spotify playlist export (JSON)
    #[arg(short = 'i', long, default_value = "demo-input/demo-mixlists.json")]
    input: String,

    /// Only report songs appearing at least this many times
    #[arg(short = 'n', long, default_value = "1")]
    min_occurrences: usize,

    /// Order of songs in the report
    #[arg(long, value_enum, default_value_t = SongOrder::FirstSeen)]
    order: SongOrder,

    /// Playlist used for neighbor context of each appearance
    #[arg(long, value_enum, default_value_t = NeighborLookup::BySource)]
    lookup: NeighborLookup,

    /// Also list playlists containing a song whose title contains this text
    #[arg(short = 'f', long)]
    find: Option<String>,

    /// Run the song search without printing matches
    #[arg(short = 's', long)]
    silent: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let input_path = PathBuf::from(shellexpand::tilde(&args.input).as_ref());

    let collection = mixlists_report::parse_collection(&input_path)
        .context("Could not load playlist export, no report generated")?;

    let config = ReportConfig::new()
        .with_min_occurrences(args.min_occurrences)
        .with_order(args.order)
        .with_lookup(args.lookup);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = ReportGenerator::new(&collection, config)
        .generate(&mut out)
        .context("Failed to write report")?;

    log::info!(
        "Report complete: {} songs, {} appearances",
        summary.songs_reported,
        summary.occurrences_reported
    );
    if summary.neighbors_skipped > 0 {
        log::warn!(
            "Neighbor context skipped for {} appearance(s)",
            summary.neighbors_skipped
        );
    }

    if let Some(query) = &args.find {
        let matches = check_for_song(&mut out, query, &collection, args.silent)
            .context("Failed to write search results")?;
        log::info!("Song search for {:?} found {} match(es)", query, matches.len());
    }

    out.flush()?;
    Ok(())
}
