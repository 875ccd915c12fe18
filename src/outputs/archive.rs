//! Dated archive file output.
//!
//! One archive per day, named `veille_<YYYY-MM-DD>.json` with the current
//! UTC date. A second run on the same day overwrites the file in place;
//! archives are never appended to or edited.

use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

use crate::models::Record;
use crate::outputs::to_pretty_json;

/// Archive file name for a given `YYYY-MM-DD` date.
pub fn archive_filename(date: &str) -> String {
    format!("veille_{date}.json")
}

/// Write the day's records, overwriting any archive already written for
/// that date. Returns the path of the file written.
#[instrument(level = "info", skip_all, fields(archive_dir = %archive_dir.display(), %date, records = records.len()))]
pub async fn write_archive(
    archive_dir: &Path,
    date: &str,
    records: &[Record],
) -> Result<PathBuf, Box<dyn Error>> {
    let json = to_pretty_json(&records)?;

    fs::create_dir_all(archive_dir).await?;
    let path = archive_dir.join(archive_filename(date));
    fs::write(&path, json).await?;

    info!(path = %path.display(), "Wrote archive file");
    Ok(path)
}
