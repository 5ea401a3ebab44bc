//! Storage backend abstraction.
//!
//! This module defines the [`LogStore`] trait that abstracts over persistence
//! backends. The entry flow controller and the log view both take a store
//! handle explicitly rather than reaching for a process-wide singleton, so the
//! store's lifecycle is visible: constructed once at startup, flushed
//! synchronously on every mutation, no teardown needed.

use crate::domain::error::Result;
use crate::storage::models::LogEntry;

/// Abstraction over the persisted trip log.
///
/// Implementations own an in-memory view of the full collection and persist it
/// after every mutation. The collection is append-only except for explicit
/// removal; insertion order is preserved and defines recency for entries with
/// equal timestamps.
///
/// # Implementations
///
/// - [`JsonLogStore`](crate::storage::JsonLogStore): single JSON file with
///   atomic writes (default)
pub trait LogStore: Send {
    /// Returns the current in-memory collection in insertion order.
    fn entries(&self) -> &[LogEntry];

    /// Validates, appends, and persists a new entry, returning the new collection.
    ///
    /// Uses the current time when `timestamp` is omitted. Append is
    /// all-or-nothing: if persisting fails, the in-memory collection is left
    /// unchanged and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CarlogError::Validation`](crate::CarlogError::Validation) for
    /// a malformed car number or unrecognized line, or a storage error if the
    /// write fails. No retries are attempted.
    fn append(&mut self, car: &str, line: &str, timestamp: Option<i64>) -> Result<&[LogEntry]>;

    /// Removes the first entry matching `(timestamp, car, line)` exactly.
    ///
    /// Returns `true` if an entry was removed and persisted. When nothing
    /// matches, the collection and the persisted blob are left untouched and
    /// `false` is returned; a missing match is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the shrunk collection fails.
    fn remove(&mut self, entry: &LogEntry) -> Result<bool>;

    /// Replaces the in-memory view with whatever is currently persisted.
    ///
    /// Called when another context sharing the same storage has written to it.
    /// There is no merge: the last write observed wins and the local view is
    /// replaced wholesale. Absent or malformed persisted data degrades to an
    /// empty collection, never an error.
    fn reload(&mut self);
}
