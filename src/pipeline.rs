//! The collect → filter → dedupe → persist pipeline.
//!
//! One run is a single linear pass: every configured feed is fetched in
//! order, matched entries are shaped into [`Record`]s, duplicates are
//! dropped, and the survivors land in a dated archive file plus the rolling
//! index. A run with no matches writes nothing and reports
//! [`RunOutcome::NothingToReport`].

use itertools::Itertools;
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::config::Config;
use crate::feeds::{self, FeedEntry, FetchedFeed};
use crate::filter;
use crate::images;
use crate::models::Record;
use crate::outputs::{archive, index};
use crate::utils::today_utc;

/// Display name used for feeds whose document carries no title.
pub const FALLBACK_SOURCE: &str = "Info Tech";

/// What a run produced.
#[derive(Debug)]
pub enum RunOutcome {
    /// No entry matched any keyword; nothing was written.
    NothingToReport,
    /// Records were archived and the index updated.
    Archived {
        records: usize,
        archive_path: PathBuf,
    },
}

/// The record date: the published string, else the updated string, else
/// empty. Values are carried verbatim; an empty published string counts as
/// absent.
fn entry_date(entry: &FeedEntry) -> String {
    entry
        .published
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| entry.updated.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or("")
        .to_string()
}

/// Shape one feed's keyword-matched entries into records.
pub fn build_records(feed: &FetchedFeed, keywords: &[String]) -> Vec<Record> {
    let source = feed.title.as_deref().unwrap_or(FALLBACK_SOURCE);

    feed.entries
        .iter()
        .filter(|entry| filter::is_relevant(entry, keywords))
        .map(|entry| Record {
            date: entry_date(entry),
            title: entry.title.clone().unwrap_or_default(),
            link: entry.link.clone().unwrap_or_default(),
            source: source.to_string(),
            image: images::resolve_image(entry),
        })
        .collect()
}

/// Drop records whose `(title, link)` pair was already seen, keeping the
/// first occurrence and the original relative order.
pub fn dedupe_records(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .unique_by(|record| (record.title.clone(), record.link.clone()))
        .collect()
}

/// Run the whole pipeline against one configuration.
///
/// Feeds are fetched sequentially with per-source failure isolation; only
/// archive/index I/O errors propagate.
#[instrument(level = "info", skip_all)]
pub async fn run(config: &Config) -> Result<RunOutcome, Box<dyn Error>> {
    let client = feeds::http_client();
    let fetched = feeds::fetch_all(&client, &config.feeds).await;

    let mut rows: Vec<Record> = Vec::new();
    for feed in &fetched {
        let matched = build_records(feed, &config.keywords);
        info!(
            source = feed.title.as_deref().unwrap_or(FALLBACK_SOURCE),
            entries = feed.entries.len(),
            matched = matched.len(),
            "Filtered feed"
        );
        rows.extend(matched);
    }

    let total = rows.len();
    let records = dedupe_records(rows);
    info!(
        matched = total,
        kept = records.len(),
        dropped = total - records.len(),
        "Deduplicated records"
    );

    if records.is_empty() {
        return Ok(RunOutcome::NothingToReport);
    }

    let today = today_utc();
    let archive_path = archive::write_archive(&config.archive_dir(), &today, &records).await?;

    let rel_file = config.archive_rel_path(&archive::archive_filename(&today));
    let entries = index::load_index(&config.index_path()).await.into_entries();
    let entries = index::apply_update(entries, &today, &rel_file);
    index::write_index(&config.index_path(), &entries).await?;

    Ok(RunOutcome::Archived {
        records: records.len(),
        archive_path,
    })
}
