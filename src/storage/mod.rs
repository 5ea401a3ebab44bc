//! Storage layer: the persisted trip log and everything derived from it.
//!
//! This module is the single source of truth for recorded entries. The log is
//! an append-only collection backed by one JSON file, persisted after every
//! mutation and refreshed when another context sharing the file writes to it.
//!
//! # Modules
//!
//! - `backend`: the [`LogStore`] trait abstraction
//! - `json`: JSON file-based store implementation
//! - `models`: the [`LogEntry`] record type
//! - `stats`: on-demand aggregates (totals, repeats, leaderboard)
//! - `watcher`: push-based external-change notification
//! - `export`: read-only JSON export of the collection

pub mod backend;
pub mod export;
pub mod json;
pub mod models;
pub mod stats;
pub mod watcher;

pub use backend::LogStore;
pub use json::JsonLogStore;
pub use models::LogEntry;
pub use stats::LeaderboardRow;
