//! Entry flow component renderers.
//!
//! Renders the three capture screens: the car number input pad, the line
//! selection grid, and the confirmation prompt. All content is centered
//! horizontally; the entry screens never need vertical windowing.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CarInputView, ConfirmView, LinePickView};

/// Line codes per grid row.
const GRID_COLUMNS: usize = 8;

/// Renders the car number input pad starting at the specified row.
///
/// Shows four digit slots, filled left to right as digits arrive, with a
/// readiness hint underneath. Returns the next available row position.
pub fn render_input_pad(row: usize, view: &CarInputView, theme: &Theme, cols: usize) -> usize {
    let slots: String = (0..4)
        .map(|i| view.digits.as_bytes().get(i).map_or('_', |b| *b as char))
        .map(|c| format!(" {c} "))
        .collect();

    position_cursor(row + 1, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print_centered(row + 1, &slots, cols);
    print!("{}", Theme::reset());

    let hint = if view.ready {
        "press Enter to choose a line".to_string()
    } else {
        format!("{} more digit(s)", 4 - view.digits.len())
    };
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(row + 3, &hint, cols);
    print!("{}", Theme::reset());

    row + 4
}

/// Renders the line selection grid starting at the specified row.
///
/// Lays the codes out in fixed-width cells, [`GRID_COLUMNS`] per row, in
/// canonical order. Returns the next available row position.
pub fn render_line_grid(row: usize, view: &LinePickView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row + 1;

    for chunk in view.lines.chunks(GRID_COLUMNS) {
        let cells: String = chunk.iter().map(|code| format!("[{code}] ")).collect();
        print!("{}", Theme::fg(&theme.colors.accent));
        print_centered(current_row, cells.trim_end(), cols);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(current_row + 1, "type a line code", cols);
    print!("{}", Theme::reset());

    current_row + 2
}

/// Renders the confirmation prompt starting at the specified row.
///
/// Returns the next available row position.
pub fn render_confirm_prompt(row: usize, view: &ConfirmView, theme: &Theme, cols: usize) -> usize {
    let summary = format!("Car {} on the {} line", view.car, view.line);

    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
    print_centered(row + 1, &summary, cols);
    print!("{}", Theme::reset());

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(row + 3, "save this trip?", cols);
    print!("{}", Theme::reset());

    row + 4
}
