//! Derived aggregates over the trip log.
//!
//! Everything in this module is computed on demand from the current collection;
//! nothing is stored. The leaderboard ranks repeat cars by how often each was
//! seen, with recency breaking ties.

use crate::storage::models::LogEntry;
use std::collections::{BTreeSet, HashMap};

/// One row of the repeat-car leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// The car number.
    pub car: String,

    /// How many times this car appears in the log.
    pub count: usize,

    /// Timestamp of the most recent sighting, in milliseconds.
    pub latest_timestamp: i64,
}

/// Returns the size of the collection.
#[must_use]
pub fn total_count(entries: &[LogEntry]) -> usize {
    entries.len()
}

/// Returns how many entries match the given car number.
#[must_use]
pub fn count_for_car(entries: &[LogEntry], car: &str) -> usize {
    entries.iter().filter(|e| e.car == car).count()
}

/// Returns the set of car numbers appearing more than once, in sorted order.
#[must_use]
pub fn repeat_cars(entries: &[LogEntry]) -> BTreeSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.car.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(car, _)| car.to_string())
        .collect()
}

/// Ranks cars seen more than once by count descending, then by most recent
/// sighting descending. Car number breaks any remaining tie so the order is
/// fully deterministic.
#[must_use]
pub fn leaderboard(entries: &[LogEntry]) -> Vec<LeaderboardRow> {
    let mut by_car: HashMap<&str, (usize, i64)> = HashMap::new();
    for entry in entries {
        let slot = by_car.entry(entry.car.as_str()).or_insert((0, i64::MIN));
        slot.0 += 1;
        slot.1 = slot.1.max(entry.timestamp);
    }

    let mut rows: Vec<LeaderboardRow> = by_car
        .into_iter()
        .filter(|&(_, (count, _))| count > 1)
        .map(|(car, (count, latest_timestamp))| LeaderboardRow {
            car: car.to_string(),
            count,
            latest_timestamp,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then(b.latest_timestamp.cmp(&a.latest_timestamp))
            .then(a.car.cmp(&b.car))
    });

    rows
}

/// Returns the collection sorted most-recent-first.
///
/// Ties on timestamp are broken by insertion order, later entries first, so
/// the newest sighting is always on top even when two commits land in the
/// same millisecond.
#[must_use]
pub fn sorted_recent(entries: &[LogEntry]) -> Vec<LogEntry> {
    let mut indexed: Vec<(usize, &LogEntry)> = entries.iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then(ib.cmp(ia)));
    indexed.into_iter().map(|(_, e)| e.clone()).collect()
}
