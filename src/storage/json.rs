//! JSON file-based log store.
//!
//! This module provides the default [`LogStore`] implementation: a single,
//! human-readable JSON file holding the full collection. Writes are atomic
//! (write-to-temp + rename) so the file is never left half-written, and the
//! storage medium guarantees whole-value replacement from the reader's
//! perspective.
//!
//! # File format
//!
//! ```json
//! {
//!   "data": [
//!     { "timestamp": 1712345678901, "car": "4523", "line": "A" }
//!   ]
//! }
//! ```
//!
//! A missing file, unparseable JSON, or a `data` field that is missing or not
//! an array all degrade to an empty collection with a logged warning; the
//! corrupt blob is left in place until the next save replaces it. Within a
//! well-formed array, each element loads independently: a structurally bad
//! element is skipped with a warning and the rest of the collection survives.
//! Entries themselves are not re-validated on load.

use crate::domain::error::{CarlogError, Result};
use crate::storage::backend::LogStore;
use crate::storage::models::LogEntry;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Serialization shape, borrowing the in-memory collection.
#[derive(Serialize)]
struct PersistPayload<'a> {
    data: &'a [LogEntry],
}

/// JSON file log store.
///
/// Keeps the entire collection in memory and persists it after every mutation.
/// Designed for a single-device personal log: hundreds of entries, not
/// millions, with reads dominating writes.
pub struct JsonLogStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory collection, insertion order preserved.
    entries: Vec<LogEntry>,
}

impl JsonLogStore {
    /// Opens the log store at the given path.
    ///
    /// If the file exists its contents are loaded leniently: malformed data is
    /// discarded with a warning rather than failing. Parent directories are
    /// created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parent directory cannot be created; a
    /// missing or corrupt data file is not an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use carlog::storage::JsonLogStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonLogStore::open(PathBuf::from("/tmp/train-car-logger.json"))?;
    /// # Ok::<(), carlog::CarlogError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON log store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let entries = Self::read_or_empty(&file_path);
        tracing::debug!(entry_count = entries.len(), "log store opened");

        Ok(Self { file_path, entries })
    }

    /// Returns the path of the persisted file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads and parses the persisted blob, degrading to empty on any failure.
    ///
    /// This is the lenient load path: absent file, unreadable file, invalid
    /// JSON, and a missing or non-array `data` field all produce an empty
    /// collection. Elements of a well-formed array load one by one so a
    /// single bad element costs only itself, never the whole collection.
    /// Failures are logged as warnings and never surfaced.
    fn read_or_empty(path: &Path) -> Vec<LogEntry> {
        if !path.exists() {
            tracing::debug!(path = ?path, "no persisted log, starting empty");
            return Vec::new();
        }

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "failed to read persisted log, starting empty");
                return Vec::new();
            }
        };

        let blob = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "failed to parse persisted log, starting empty");
                return Vec::new();
            }
        };

        let Some(items) = blob.get("data").and_then(serde_json::Value::as_array) else {
            tracing::warn!(path = ?path, "persisted log has no data array, starting empty");
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| match serde_json::from_value::<LogEntry>(item.clone()) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed entry in persisted log");
                    None
                }
            })
            .collect()
    }

    /// Persists the full collection to disk using an atomic write.
    ///
    /// Serializes to a temporary file first, then renames over the target, so
    /// readers observe either the old blob or the new one, never a partial
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or either filesystem step fails. The
    /// caller treats a failed write as terminal for the operation; nothing is
    /// retried here.
    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, entry_count = self.entries.len(), "saving log");

        let payload = PersistPayload {
            data: &self.entries,
        };
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| CarlogError::Storage(format!("failed to serialize log: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("log saved");
        Ok(())
    }
}

impl LogStore for JsonLogStore {
    fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    fn append(&mut self, car: &str, line: &str, timestamp: Option<i64>) -> Result<&[LogEntry]> {
        let _span = tracing::debug_span!("log_append", car = %car, line = %line).entered();

        let entry = LogEntry::new(car, line, timestamp)?;
        self.entries.push(entry);

        if let Err(e) = self.save_to_file() {
            // All-or-nothing: roll back the in-memory push on a failed write.
            self.entries.pop();
            return Err(e);
        }

        tracing::debug!(entry_count = self.entries.len(), "entry appended");
        Ok(&self.entries)
    }

    fn remove(&mut self, entry: &LogEntry) -> Result<bool> {
        let _span = tracing::debug_span!("log_remove", car = %entry.car, line = %entry.line).entered();

        let Some(index) = self.entries.iter().position(|e| e == entry) else {
            tracing::debug!("no matching entry, leaving log unchanged");
            return Ok(false);
        };

        let removed = self.entries.remove(index);
        if let Err(e) = self.save_to_file() {
            self.entries.insert(index, removed);
            return Err(e);
        }

        tracing::debug!(entry_count = self.entries.len(), "entry removed");
        Ok(true)
    }

    fn reload(&mut self) {
        tracing::debug!(path = ?self.file_path, "reloading log from disk");
        self.entries = Self::read_or_empty(&self.file_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonLogStore {
        JsonLogStore::open(dir.path().join("train-car-logger.json")).unwrap()
    }

    #[test]
    fn starts_empty_without_persisted_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn append_then_reload_yields_last_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let before = chrono::Utc::now().timestamp_millis();
        store.append("4523", "A", None).unwrap();
        let after = chrono::Utc::now().timestamp_millis();

        store.reload();
        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].car, "4523");
        assert_eq!(entries[0].line, "A");
        assert!(entries[0].timestamp >= before && entries[0].timestamp <= after);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.append("1111", "A", Some(30)).unwrap();
        store.append("2222", "C", Some(10)).unwrap();
        store.append("3333", "E", Some(20)).unwrap();

        store.reload();
        let cars: Vec<&str> = store.entries().iter().map(|e| e.car.as_str()).collect();
        assert_eq!(cars, vec!["1111", "2222", "3333"]);
    }

    #[test]
    fn append_rejects_invalid_input_without_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.append("123", "A", None).is_err());
        assert!(store.append("1234", "X", None).is_err());
        assert!(store.entries().is_empty());
        assert!(!dir.path().join("train-car-logger.json").exists());
    }

    #[test]
    fn malformed_blob_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonLogStore::open(path).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn missing_data_field_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        std::fs::write(&path, r#"{"other": 1}"#).unwrap();

        let store = JsonLogStore::open(path).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn non_array_data_field_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        std::fs::write(&path, r#"{"data": "oops"}"#).unwrap();

        let store = JsonLogStore::open(path).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn foreign_entries_pass_through_untouched() {
        // Entries are trusted on load: a wrong-length car is kept as-is.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        std::fs::write(
            &path,
            r#"{"data": [{"timestamp": 5, "car": "123456", "line": "zz"}]}"#,
        )
        .unwrap();

        let store = JsonLogStore::open(path).unwrap();
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].car, "123456");
    }

    #[test]
    fn malformed_element_is_skipped_without_dropping_the_rest() {
        // One element missing its line field; the surrounding entries survive.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        std::fs::write(
            &path,
            r#"{"data": [
                {"timestamp": 1, "car": "1111", "line": "A"},
                {"timestamp": 3, "car": "3333"},
                {"timestamp": 2, "car": "2222", "line": "C"}
            ]}"#,
        )
        .unwrap();

        let store = JsonLogStore::open(path).unwrap();
        let cars: Vec<&str> = store.entries().iter().map(|e| e.car.as_str()).collect();
        assert_eq!(cars, vec!["1111", "2222"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.append("4523", "A", Some(100)).unwrap();
        store.append("4523", "A", Some(100)).unwrap();

        let target = store.entries()[0].clone();
        assert!(store.remove(&target).unwrap());
        assert_eq!(store.entries().len(), 1);

        // A duplicate entry value matches again, but only one is removed per call.
        assert!(store.remove(&target).unwrap());
        assert_eq!(store.entries().len(), 0);

        // Nothing left to match: a no-op, not an error.
        assert!(!store.remove(&target).unwrap());
        assert_eq!(store.entries().len(), 0);
    }

    #[test]
    fn remove_without_match_leaves_persisted_state_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        let mut store = JsonLogStore::open(path.clone()).unwrap();
        store.append("4523", "A", Some(100)).unwrap();

        let before = std::fs::read_to_string(&path).unwrap();
        let missing = LogEntry::new("9999", "G", Some(42)).unwrap();
        assert!(!store.remove(&missing).unwrap());
        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn serialization_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        let mut store = JsonLogStore::open(path.clone()).unwrap();
        store.append("4523", "A", Some(100)).unwrap();
        store.append("0001", "L", Some(200)).unwrap();

        let first = std::fs::read_to_string(&path).unwrap();
        store.save_to_file().unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reload_picks_up_external_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train-car-logger.json");
        let mut store = JsonLogStore::open(path.clone()).unwrap();

        // Simulate another context replacing the blob wholesale.
        std::fs::write(
            &path,
            r#"{"data": [{"timestamp": 7, "car": "7777", "line": "7"}]}"#,
        )
        .unwrap();

        store.reload();
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].car, "7777");
    }
}
