//! Persistence: the dated archive files and the rolling index.
//!
//! # Submodules
//!
//! - [`archive`]: writes the day's records to `archives/veille_<date>.json`
//! - [`index`]: maintains the bounded, most-recent-first `index.json`
//!
//! # Output Structure
//!
//! ```text
//! output/
//! ├── archives/
//! │   ├── veille_2024-04-30.json
//! │   └── veille_2024-05-01.json
//! └── index.json
//! ```
//!
//! Both files are whole-file overwrites in the same format the original
//! archive consumers read: JSON arrays, 4-space indent, non-ASCII characters
//! kept literal.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;

pub mod archive;
pub mod index;

/// Serialize a value as pretty JSON with a 4-space indent.
///
/// serde_json never escapes non-ASCII, so accented titles survive as typed.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
