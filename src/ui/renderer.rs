//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to the layout for the active screen

use std::io::Write;

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::ScreenView;

/// Renders the app UI to stdout.
///
/// Clears the screen, computes the view model from application state, and
/// delegates to the layout for the active screen. Output is flushed so the
/// frame appears even with stdout line-buffered under raw mode.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    // Clear and home before drawing the frame.
    print!("\u{1b}[2J\u{1b}[H");

    match viewmodel.screen {
        ScreenView::Log(_) => components::render_log_mode(&viewmodel, &state.theme, cols, rows),
        _ => components::render_entry_mode(&viewmodel, &state.theme, cols, rows),
    }

    let _ = std::io::stdout().flush();
}
