//! Filesystem location of the persisted slot.

use std::path::PathBuf;

/// The JSON file holding the serialized note collection.
///
/// Lives under the platform data directory; falls back to the current
/// directory when none is available.
#[must_use]
pub fn slot_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bulletin")
        .join("news.json")
}
