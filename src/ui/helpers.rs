//! Shared rendering utilities.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints text centered within the given width at a row.
///
/// Padding is split evenly; if the width cannot evenly divide, right padding
/// is slightly larger. Text longer than the width is printed unpadded.
pub fn print_centered(row: usize, text: &str, cols: usize) {
    let text_len = text.len().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}{text}", " ".repeat(padding));
}
