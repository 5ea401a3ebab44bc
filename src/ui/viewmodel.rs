//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain display-ready data only: timestamps are already formatted, the log
//! table is already windowed, aggregates are already computed.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic.

use crate::storage::stats::LeaderboardRow;

/// Complete UI view model for rendering.
///
/// Computed fresh from `AppState` on every render. The screen variant decides
/// which layout the renderer uses; header and footer are always present.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (screen title).
    pub header: HeaderInfo,

    /// The screen body to render.
    pub screen: ScreenView,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Transient one-line status message, if any.
    pub status: Option<String>,
}

/// Body content for the active screen.
#[derive(Debug, Clone)]
pub enum ScreenView {
    /// The car number input pad.
    CarInput(CarInputView),

    /// The line selection grid.
    LinePick(LinePickView),

    /// The confirmation prompt.
    Confirm(ConfirmView),

    /// The recorded log with aggregates.
    Log(LogView),
}

/// Display state for the car number input pad.
#[derive(Debug, Clone)]
pub struct CarInputView {
    /// Digits entered so far (0 to 4 of them).
    pub digits: String,

    /// Whether the number is complete and confirmation is possible.
    pub ready: bool,
}

/// Display state for the line selection grid.
#[derive(Debug, Clone)]
pub struct LinePickView {
    /// The selectable line codes, in canonical order.
    pub lines: Vec<&'static str>,
}

/// Display state for the confirmation prompt.
#[derive(Debug, Clone)]
pub struct ConfirmView {
    /// The captured 4-digit car number.
    pub car: String,

    /// The selected line code.
    pub line: String,
}

/// Display state for the log screen.
///
/// Rows are pre-windowed to the terminal height and sorted newest first.
#[derive(Debug, Clone)]
pub struct LogView {
    /// Visible table rows, newest first.
    pub rows: Vec<LogRowView>,

    /// Total number of recorded trips (including rows outside the window).
    pub total: usize,

    /// Car numbers seen more than once, ascending.
    pub repeats: Vec<String>,

    /// Repeat-car leaderboard, most sighted first.
    pub leaderboard: Vec<LeaderboardRow>,
}

/// One row of the log table.
#[derive(Debug, Clone)]
pub struct LogRowView {
    /// Formatted timestamp of the sighting.
    pub when: String,

    /// The 4-digit car number.
    pub car: String,

    /// The line code.
    pub line: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  d: delete  q: quit").
    pub keybindings: String,
}
