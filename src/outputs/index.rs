//! Rolling archive index maintenance.
//!
//! `index.json` is an ordered array of `{date, file}` pointers, most recent
//! first, capped at [`MAX_ENTRIES`], at most one entry per date. Each run
//! reads it, prepends today's pointer if the date is new, truncates, and
//! writes the whole file back.
//!
//! A missing or unreadable index is an explicit [`IndexLoad::Fresh`]
//! outcome, never an error: the run simply starts a new index.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::models::IndexEntry;
use crate::outputs::to_pretty_json;

/// Maximum number of archive pointers the index keeps.
pub const MAX_ENTRIES: usize = 20;

/// Outcome of reading the index file.
#[derive(Debug, PartialEq, Eq)]
pub enum IndexLoad {
    /// The file existed and parsed.
    Existing(Vec<IndexEntry>),
    /// The file was absent or unreadable; the index starts over.
    Fresh,
}

impl IndexLoad {
    /// The entries to build on: the loaded list, or empty on a fresh start.
    pub fn into_entries(self) -> Vec<IndexEntry> {
        match self {
            IndexLoad::Existing(entries) => entries,
            IndexLoad::Fresh => Vec::new(),
        }
    }
}

/// Read the current index.
///
/// A parse failure is logged and degrades to a fresh start; it never
/// aborts the run.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_index(path: &Path) -> IndexLoad {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(_) => return IndexLoad::Fresh,
    };

    match serde_json::from_str::<Vec<IndexEntry>>(&raw) {
        Ok(entries) => IndexLoad::Existing(entries),
        Err(e) => {
            warn!(error = %e, "Index file did not parse; starting a fresh index");
            IndexLoad::Fresh
        }
    }
}

/// Prepend a pointer for `date` unless one already exists, then truncate to
/// the most recent [`MAX_ENTRIES`]. Pure so the update rule is testable on
/// its own.
pub fn apply_update(mut entries: Vec<IndexEntry>, date: &str, file: &str) -> Vec<IndexEntry> {
    if !entries.iter().any(|entry| entry.date == date) {
        entries.insert(
            0,
            IndexEntry {
                date: date.to_string(),
                file: file.to_string(),
            },
        );
    }
    entries.truncate(MAX_ENTRIES);
    entries
}

/// Overwrite the index file with the given entries.
#[instrument(level = "info", skip_all, fields(path = %path.display(), entries = entries.len()))]
pub async fn write_index(path: &Path, entries: &[IndexEntry]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let json = to_pretty_json(&entries)?;
    fs::write(path, json).await?;
    info!("Updated index file");
    Ok(())
}
