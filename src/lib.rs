//! Carlog: a terminal app for logging the train cars you ride.
//!
//! Carlog records subway trips as (timestamp, car number, line) entries in a
//! JSON file and derives sighting statistics from them:
//! - A guided three-step capture flow (number pad, line grid, confirmation)
//! - An append-only trip log with totals, repeat cars, and a leaderboard
//! - Persistent state backed by atomic JSON file storage
//! - Live refresh when another process writes the same log file
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │
//! │ (ui/)         │   │ (storage/)    │
//! │ - Rendering   │   │ - JSON I/O    │
//! │ - Theming     │   │ - Aggregates  │
//! │ - Components  │   │ - File watch  │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Line codes and validation (domain/lines)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (line codes, validation, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON file persistence, aggregates, watcher, export
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based tracing (internal)
//!
//! # Configuration
//!
//! Configuration is read from `~/.config/carlog/config.toml`:
//!
//! ```toml
//! theme = "catppuccin-mocha"
//! trace_level = "info"
//! # data_dir = "/somewhere/else"
//! # export_dir = "~/Downloads"
//! ```
//!
//! A missing or malformed file yields the defaults.
//!
//! # Example
//!
//! ```no_run
//! use carlog::storage::{JsonLogStore, LogStore};
//! use carlog::{handle_event, initialize, Config, Event};
//!
//! let config = Config::load();
//! let mut store = JsonLogStore::open(config.data_dir().join("train-car-logger.json"))?;
//! let mut state = initialize(&config, store.entries().to_vec());
//!
//! let (needs_render, _actions) = handle_event(&mut state, &mut store, &Event::Digit('4'))?;
//! assert!(needs_render);
//! # Ok::<(), carlog::CarlogError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Page, Step};
pub use domain::{CarlogError, Result};
pub use ui::Theme;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application configuration loaded from the TOML config file.
///
/// All fields are optional; an absent field falls back to its platform
/// default at resolution time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted log and diagnostics.
    ///
    /// Default: the platform data directory (e.g. `~/.local/share/carlog`).
    pub data_dir: Option<PathBuf>,

    /// Directory export files are written to.
    ///
    /// Default: the platform download directory, falling back to home.
    pub export_dir: Option<PathBuf>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// Tracing level for the diagnostic log.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// A missing or malformed file yields [`Config::default`]; configuration
    /// problems are never fatal.
    #[must_use]
    pub fn load() -> Self {
        Self::from_file(&infrastructure::config_file())
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// A missing file is the normal first-run case and yields the defaults
    /// silently; a present but unparseable file also yields the defaults,
    /// with a warning.
    #[must_use]
    pub fn from_file(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "malformed config file, using defaults");
                Self::default()
            }
        }
    }

    /// Resolves the directory holding the persisted log.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(infrastructure::data_dir)
    }

    /// Resolves the directory export files are written to.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(infrastructure::default_export_dir)
    }
}

/// Initializes application state from configuration and a loaded collection.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// wraps the entries in a fresh [`AppState`] showing the entry screen.
#[must_use]
pub fn initialize(config: &Config, entries: Vec<storage::LogEntry>) -> AppState {
    tracing::debug!(entry_count = entries.len(), "initializing carlog");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = ?theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(entries, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(&dir.path().join("config.toml"));
        assert!(config.data_dir.is_none());
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn malformed_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [not toml").unwrap();

        let config = Config::from_file(&path);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn config_fields_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "theme = \"catppuccin-latte\"\ntrace_level = \"debug\"\ndata_dir = \"/tmp/carlog\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/carlog"));
    }

    #[test]
    fn initialize_resolves_the_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };

        let state = initialize(&config, vec![]);
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.page, Page::Entry);
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };

        let state = initialize(&config, vec![]);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
