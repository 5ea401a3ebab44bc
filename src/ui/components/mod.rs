//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different
//! screens, each responsible for one part of the interface, plus the
//! high-level layout functions the renderer dispatches to.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`entry`]: Capture screens (input pad, line grid, confirmation)
//! - [`log_table`]: Trip table with aggregates and empty state
//!
//! # Layout Modes
//!
//! - [`render_entry_mode`]: Header + capture screen body + Footer
//! - [`render_log_mode`]: Header + aggregates + table + status + Footer

mod entry;
mod footer;
mod header;
mod log_table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenView, UiViewModel};

use entry::{render_confirm_prompt, render_input_pad, render_line_grid};
use footer::render_footer;
use header::render_header;
use log_table::{render_empty_log, render_stats, render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one of the capture screens.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Screen body]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// Log views are dispatched to [`render_log_mode`] by the renderer; one
/// arriving here renders nothing.
pub fn render_entry_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    match &vm.screen {
        ScreenView::CarInput(view) => render_input_pad(current_row, view, theme, cols),
        ScreenView::LinePick(view) => render_line_grid(current_row, view, theme, cols),
        ScreenView::Confirm(view) => render_confirm_prompt(current_row, view, theme, cols),
        ScreenView::Log(_) => return,
    };

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the log screen.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Totals + repeats]
/// [Leaderboard]
/// [blank line]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Status]
/// [Border]
/// [Footer]
/// ```
///
/// Table rows arrive pre-windowed in the view model, so this function never
/// overflows the space between the column headers and the status line.
pub fn render_log_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let ScreenView::Log(view) = &vm.screen else {
        return;
    };

    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_stats(current_row, view, theme);
    current_row += 1; // blank line between aggregates and table
    current_row = render_table_headers(current_row, theme);

    if view.total == 0 {
        render_empty_log(current_row + 1, theme, cols);
    } else {
        render_table_rows(current_row, &view.rows, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    if let Some(status) = &vm.status {
        position_cursor(status_row, 1);
        print!("{}{status}{}", Theme::fg(&theme.colors.status_fg), Theme::reset());
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
