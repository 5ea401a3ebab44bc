//! JSON export of the trip log.
//!
//! A read-only consumer of store state: serializes the recency-sorted
//! collection to a timestamped file the user can share or archive. Does not
//! touch the persisted blob.

use crate::domain::error::{CarlogError, Result};
use crate::storage::models::LogEntry;
use crate::storage::stats;
use std::path::{Path, PathBuf};

/// Writes the full collection, sorted most-recent-first, to a
/// `train-car-log-YYYYMMDD-HHMMSS.json` file in `dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn export_entries(dir: &Path, entries: &[LogEntry]) -> Result<PathBuf> {
    let sorted = stats::sorted_recent(entries);

    let file_name = format!(
        "train-car-log-{}.json",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(file_name);

    let json = serde_json::to_string_pretty(&sorted)
        .map_err(|e| CarlogError::Storage(format!("failed to serialize export: {e}")))?;
    std::fs::write(&path, json)?;

    tracing::info!(path = ?path, entry_count = sorted.len(), "log exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_sorted_collection() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            LogEntry::new("1111", "A", Some(10)).unwrap(),
            LogEntry::new("2222", "C", Some(30)).unwrap(),
        ];

        let path = export_entries(dir.path(), &entries).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("train-car-log-"));

        let raw = std::fs::read_to_string(&path).unwrap();
        let exported: Vec<LogEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(exported.len(), 2);
        assert_eq!(exported[0].car, "2222");
        assert_eq!(exported[1].car, "1111");
    }
}
