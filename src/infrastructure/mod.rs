//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves the platform-specific paths the app depends on: where
//! the log is persisted, where configuration lives, and where exports land.

pub mod paths;

pub use paths::{config_file, data_dir, default_export_dir, storage_file, STORAGE_FILE_NAME};
