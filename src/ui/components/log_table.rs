//! Log screen component renderers.
//!
//! Renders the recorded-trip table with its aggregate lines: total count,
//! repeat cars, and the repeat-car leaderboard. An empty log shows a friendly
//! prompt instead of an empty table.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{LogRowView, LogView};

/// Fixed width of the WHEN column (formatted timestamp plus gap).
const WHEN_WIDTH: usize = 21;

/// Fixed width of the CAR column.
const CAR_WIDTH: usize = 8;

/// Renders the aggregate lines at the specified row.
///
/// Two lines: totals with the repeat set, then the leaderboard. Returns the
/// next available row position.
pub fn render_stats(row: usize, view: &LogView, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("Total trips: {}", view.total);
    if !view.repeats.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("   repeats: {}", view.repeats.join(", "));
    }
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    if view.leaderboard.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("No repeat cars yet");
    } else {
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("Most sighted: ");
        let top: Vec<String> = view
            .leaderboard
            .iter()
            .take(5)
            .map(|r| format!("{} x{}", r.car, r.count))
            .collect();
        print!("{}", top.join("  "));
    }
    print!("{}", Theme::reset());

    row + 2
}

/// Renders the table column headers at the specified row.
///
/// Returns the next available row position.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<WHEN_WIDTH$}{:<CAR_WIDTH$}{}", "WHEN", "CAR", "LINE");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all visible table rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_table_rows(row: usize, items: &[LogRowView], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row.
///
/// The row is padded to the full terminal width so the selection background
/// covers the whole line.
fn render_table_row(row: usize, item: &LogRowView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(
        "{:<WHEN_WIDTH$}{:<CAR_WIDTH$}{}",
        item.when, item.car, item.line
    );

    let line_len = WHEN_WIDTH + CAR_WIDTH + item.line.len();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the empty log message centered at the specified row.
pub fn render_empty_log(row: usize, theme: &Theme, cols: usize) {
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(row, "No trips yet. Log your first train car!", cols);
    print!("{}", Theme::reset());
}
