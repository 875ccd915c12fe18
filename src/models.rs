//! Data models for collected news records and the archive index.
//!
//! Two shapes are persisted:
//! - [`Record`]: one matched news item, written into the day's archive file
//! - [`IndexEntry`]: one pointer from the rolling index to an archive file
//!
//! Both derive `Serialize`/`Deserialize`; serde emits struct fields in
//! declaration order, which fixes the on-disk field order consumers rely on.

use serde::{Deserialize, Serialize};

/// A matched news item, shaped for the archive file.
///
/// All fields are plain strings. `date` carries whatever timestamp string
/// the feed published, verbatim; it is never parsed or normalized.
///
/// # Uniqueness
///
/// Within a single run no two records share the same `(title, link)` pair;
/// the deduplication pass enforces this before anything is written.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Record {
    /// The entry's publication timestamp as the feed stated it, or the
    /// update timestamp when no publication timestamp was given, else empty.
    pub date: String,
    /// The entry title.
    pub title: String,
    /// The entry's article URL.
    pub link: String,
    /// Display name of the feed the entry came from.
    pub source: String,
    /// A representative image URL; never empty (a placeholder is used when
    /// the entry carries no image).
    pub image: String,
}

/// One pointer in the rolling archive index.
///
/// The index file is an ordered array of these, most recent first, capped
/// at [`crate::outputs::index::MAX_ENTRIES`], with at most one entry per
/// date. `file` is relative to the output root, e.g.
/// `archives/veille_2024-05-01.json`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct IndexEntry {
    /// Archive date in `YYYY-MM-DD` (UTC).
    pub date: String,
    /// Path of the archive file, relative to the output root.
    pub file: String,
}
