//! Storage record models for the persistence layer.
//!
//! This module defines [`LogEntry`], the single record type persisted by the
//! log store. Validation happens at construction: an entry cannot exist with a
//! malformed car number or an unrecognized line code. Entries deserialized from
//! storage bypass construction and are trusted as-is, so a foreign or corrupted
//! persisted entry passes through untouched to display layers.

use crate::domain::error::{CarlogError, Result};
use crate::domain::lines::{is_recognized_line, is_valid_car_number};
use serde::{Deserialize, Serialize};

/// One recorded trip: a car number, the line it was riding, and when.
///
/// `timestamp` is milliseconds since the Unix epoch, assigned at commit time
/// unless explicitly overridden. `car` is stored as text so leading zeros
/// survive round-trips through storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Milliseconds since the Unix epoch when the trip was recorded.
    pub timestamp: i64,

    /// Four-digit car number, leading zeros preserved.
    pub car: String,

    /// Line code from the recognized set.
    pub line: String,
}

impl LogEntry {
    /// Constructs a validated log entry.
    ///
    /// Uses the current time when `timestamp` is omitted. This is the only way
    /// to create an entry from user input; the car and line invariants are
    /// enforced here, before an entry can exist.
    ///
    /// # Errors
    ///
    /// Returns [`CarlogError::Validation`] if `car` is not exactly 4 ASCII
    /// digits or `line` is not in the recognized set. No state is touched on
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use carlog::storage::LogEntry;
    ///
    /// let entry = LogEntry::new("4523", "A", None)?;
    /// assert_eq!(entry.car, "4523");
    /// assert_eq!(entry.line, "A");
    ///
    /// assert!(LogEntry::new("45", "A", None).is_err());
    /// assert!(LogEntry::new("4523", "X", None).is_err());
    /// # Ok::<(), carlog::CarlogError>(())
    /// ```
    pub fn new(car: &str, line: &str, timestamp: Option<i64>) -> Result<Self> {
        if !is_valid_car_number(car) {
            return Err(CarlogError::Validation(format!(
                "car number must be exactly 4 digits, got {car:?}"
            )));
        }
        if !is_recognized_line(line) {
            return Err(CarlogError::Validation(format!(
                "unrecognized line code {line:?}"
            )));
        }

        Ok(Self {
            timestamp: timestamp.unwrap_or_else(|| chrono::Utc::now().timestamp_millis()),
            car: car.to_string(),
            line: line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_valid_entry_with_current_time() {
        let before = chrono::Utc::now().timestamp_millis();
        let entry = LogEntry::new("0042", "G", None).unwrap();
        let after = chrono::Utc::now().timestamp_millis();

        assert_eq!(entry.car, "0042");
        assert_eq!(entry.line, "G");
        assert!(entry.timestamp >= before && entry.timestamp <= after);
    }

    #[test]
    fn explicit_timestamp_overrides_current_time() {
        let entry = LogEntry::new("1234", "7", Some(1_700_000_000_000)).unwrap();
        assert_eq!(entry.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn rejects_invalid_car_number() {
        assert!(matches!(
            LogEntry::new("123", "A", None),
            Err(CarlogError::Validation(_))
        ));
        assert!(matches!(
            LogEntry::new("12a4", "A", None),
            Err(CarlogError::Validation(_))
        ));
    }

    #[test]
    fn rejects_unrecognized_line() {
        assert!(matches!(
            LogEntry::new("1234", "X", None),
            Err(CarlogError::Validation(_))
        ));
    }

    #[test]
    fn entries_deserialize_without_revalidation() {
        // Foreign data is trusted on load: a wrong-length car passes through.
        let entry: LogEntry =
            serde_json::from_str(r#"{"timestamp": 1, "car": "12345", "line": "??"}"#).unwrap();
        assert_eq!(entry.car, "12345");
        assert_eq!(entry.line, "??");
    }
}
