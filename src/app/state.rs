//! Application state and view model computation.
//!
//! This module defines [`AppState`], the central state container, along with
//! [`FlowState`], the transient capture-flow state owned by the entry flow and
//! never persisted. View models are computed on demand from state snapshots.
//!
//! # State components
//!
//! - **Flow**: current step, accumulated car number, selected line
//! - **Entries**: in-memory view of the store's collection, refreshed after
//!   every mutation and on external-change notifications
//! - **Selection**: cursor position within the log table
//! - **Page**: which screen is showing

use crate::app::modes::{Page, Step};
use crate::domain::lines::LINE_CODES;
use crate::storage::models::LogEntry;
use crate::storage::stats;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CarInputView, ConfirmView, FooterInfo, HeaderInfo, LinePickView, LogRowView, LogView,
    ScreenView, UiViewModel,
};

/// Transient state of the entry capture flow.
///
/// Owned solely by the flow controller; never persisted. Invariant:
/// `selected_line` is `Some` if and only if `step` is [`Step::Confirm`] — the
/// line is captured during the LinePick→Confirm transition and cleared by
/// every reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowState {
    /// Current step of the capture sequence.
    pub step: Step,

    /// Accumulated digit string, length 0–4.
    pub car_number: String,

    /// Line captured at the confirm step, `None` everywhere else.
    pub selected_line: Option<String>,
}

impl FlowState {
    /// Creates the initial flow state: `Input` step, nothing captured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::Input,
            car_number: String::new(),
            selected_line: None,
        }
    }

    /// Appends a digit to the car number, returning whether anything changed.
    ///
    /// Rejected without state change once the number is 4 digits long, and for
    /// any character that is not an ASCII digit.
    pub fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.car_number.len() >= 4 {
            return false;
        }
        self.car_number.push(digit);
        true
    }

    /// Removes the last digit, returning whether anything changed.
    pub fn backspace(&mut self) -> bool {
        self.car_number.pop().is_some()
    }

    /// Resets the flow fully to its initial state.
    pub fn reset(&mut self) {
        self.step = Step::Input;
        self.car_number.clear();
        self.selected_line = None;
    }

    /// Returns `true` when the car number is complete (exactly 4 digits).
    #[must_use]
    pub fn is_complete_car(&self) -> bool {
        self.car_number.len() == 4
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

/// Central application state container.
///
/// Holds the capture flow, the current view of the stored collection, log
/// table selection, and the active theme. Mutated by the event handler in
/// response to user input and storage notifications; view models are computed
/// on demand.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Which screen is showing.
    pub page: Page,

    /// Entry capture flow state.
    pub flow: FlowState,

    /// In-memory view of the store's collection, insertion order.
    ///
    /// Refreshed from the store handle after every mutation and whenever the
    /// persisted blob changes in another context.
    pub entries: Vec<LogEntry>,

    /// Zero-based cursor within the recency-sorted log table.
    pub selected_index: usize,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Transient one-line status shown on the log screen (last commit,
    /// export result, error). Cleared when the log closes.
    pub status: Option<String>,
}

impl AppState {
    /// Creates application state with an initial collection and theme.
    #[must_use]
    pub fn new(entries: Vec<LogEntry>, theme: Theme) -> Self {
        Self {
            page: Page::Entry,
            flow: FlowState::new(),
            entries,
            selected_index: 0,
            theme,
            status: None,
        }
    }

    /// Moves the log cursor down by one, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.entries.len();
    }

    /// Moves the log cursor up by one, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.entries.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Clamps the log cursor to valid bounds after the collection changes.
    pub fn clamp_selection(&mut self) {
        if self.entries.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.entries.len() - 1);
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// The log table is windowed around the cursor so long logs stay navigable
    /// on short terminals; entry screens need no windowing.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UiViewModel {
        let screen = match self.page {
            Page::Entry => match self.flow.step {
                Step::Input => ScreenView::CarInput(CarInputView {
                    digits: self.flow.car_number.clone(),
                    ready: self.flow.is_complete_car(),
                }),
                Step::LinePick => ScreenView::LinePick(LinePickView {
                    lines: LINE_CODES.to_vec(),
                }),
                Step::Confirm => ScreenView::Confirm(ConfirmView {
                    car: self.flow.car_number.clone(),
                    line: self.flow.selected_line.clone().unwrap_or_default(),
                }),
            },
            Page::Log => ScreenView::Log(self.compute_log_view(rows)),
        };

        UiViewModel {
            header: self.compute_header(),
            screen,
            footer: self.compute_footer(),
            status: self.status.clone(),
        }
    }

    /// Builds the log screen view: windowed table rows plus aggregates.
    fn compute_log_view(&self, rows: usize) -> LogView {
        let sorted = stats::sorted_recent(&self.entries);

        // Chrome: blank line, header, border, two stat lines, blank, column
        // headers, bottom border, status, footer.
        let available_rows = rows.saturating_sub(10).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(sorted.len());
        if visible_end - visible_start < available_rows && sorted.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let table_rows: Vec<LogRowView> = sorted[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| LogRowView {
                when: format_timestamp(entry.timestamp),
                car: entry.car.clone(),
                line: entry.line.clone(),
                is_selected: visible_start + relative_idx == self.selected_index,
            })
            .collect();

        LogView {
            rows: table_rows,
            total: stats::total_count(&self.entries),
            repeats: stats::repeat_cars(&self.entries).into_iter().collect(),
            leaderboard: stats::leaderboard(&self.entries),
        }
    }

    /// Computes the header title for the current screen.
    fn compute_header(&self) -> HeaderInfo {
        let title = match self.page {
            Page::Entry => match self.flow.step {
                Step::Input => " Car Number ".to_string(),
                Step::LinePick => " Choose Line ".to_string(),
                Step::Confirm => " Confirm Trip ".to_string(),
            },
            Page::Log => format!(" Log ({}) ", self.entries.len()),
        };
        HeaderInfo { title }
    }

    /// Computes the footer keybinding hints for the current screen.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.page {
            Page::Entry => match self.flow.step {
                Step::Input => {
                    "0-9: digits  Backspace: erase  Enter: continue  r: clear  l: log  q: quit"
                }
                Step::LinePick => "type a line code to select  Esc: back",
                Step::Confirm => "Enter/y: save  Esc/n: cancel",
            },
            Page::Log => "j/k: navigate  d: delete  e: export  Esc: close  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Formats a millisecond timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Out-of-range timestamps (possible in foreign persisted data, which is
/// trusted on load) render as the raw number rather than failing.
fn format_timestamp(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms)
        .map_or_else(
            || timestamp_ms.to_string(),
            |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}
