//! # Veille News
//!
//! A small news-watch pipeline that collects entries from a fixed set of
//! syndication feeds, keeps the keyword-relevant ones, and archives them as
//! dated JSON files with a rolling index.
//!
//! ## Features
//!
//! - Fetches RSS 2.0 and Atom feeds (sequentially, one source at a time)
//! - Case-insensitive keyword filtering over title + summary
//! - Representative image per entry with a placeholder fallback
//! - Deduplication on (title, link), first occurrence wins
//! - Dated archive files (`archives/veille_YYYY-MM-DD.json`) plus a
//!   bounded most-recent-first `index.json`
//!
//! ## Usage
//!
//! ```sh
//! veille_news
//! veille_news -c watchlist.yaml -o /var/lib/veille
//! ```
//!
//! ## Architecture
//!
//! One linear pass per run:
//! 1. **Fetch**: download and parse each configured feed; failures are
//!    isolated per source
//! 2. **Filter + shape**: keep keyword matches as flat records
//! 3. **Dedupe**: drop repeated (title, link) pairs
//! 4. **Persist**: write the day's archive and update the index, unless
//!    nothing matched

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod feeds;
mod filter;
mod images;
mod models;
mod outputs;
mod pipeline;
mod utils;

use cli::Cli;
use config::Config;
use pipeline::RunOutcome;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("Collection starting");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, ?args.output_dir, "Parsed CLI arguments");

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(dir) = args.output_dir {
        config.output_dir = dir.into();
    }
    info!(
        feeds = config.feeds.len(),
        keywords = config.keywords.len(),
        output_dir = %config.output_dir.display(),
        "Loaded configuration"
    );

    // Early check: ensure the archive directory is writable before fetching
    if let Err(e) = ensure_writable_dir(&config.archive_dir()).await {
        error!(
            path = %config.archive_dir().display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Ok(());
    }

    match pipeline::run(&config).await {
        Ok(RunOutcome::NothingToReport) => {
            info!("No articles found");
        }
        Ok(RunOutcome::Archived {
            records,
            archive_path,
        }) => {
            info!(records, archive = %archive_path.display(), "Archive written");
        }
        Err(e) => {
            error!(error = %e, "Run failed while writing outputs");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Collection complete"
    );

    Ok(())
}
