//! Terminal wrapper and entry point.
//!
//! This module provides the thin integration layer between the carlog library
//! and the terminal. It owns the raw-mode lifecycle, translates key presses
//! into library events, executes the actions the handler emits, and forwards
//! file-watcher notifications as storage-change events.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+c`: Quit
//!
//! Number pad:
//! - `0`-`9`: Enter digits
//! - `Backspace`: Erase last digit
//! - `Enter`: Continue to line selection (requires 4 digits)
//! - `r`/`Esc`: Clear the number
//! - `l`: Open the log
//! - `q`: Quit
//!
//! Line selection:
//! - Any line code character: Select that line
//! - `Esc`: Back to the number pad
//!
//! Confirmation:
//! - `Enter`/`y`: Save the trip
//! - `Esc`/`n`: Cancel
//!
//! Log:
//! - `j`/`Down`, `k`/`Up`: Move the cursor
//! - `d`: Delete the selected trip
//! - `e`: Export the log
//! - `Esc`/`l`: Close the log
//! - `q`: Quit

#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use carlog::storage::watcher::start_watcher;
use carlog::storage::{export, JsonLogStore, LogStore};
use carlog::ui::render;
use carlog::{
    handle_event, initialize, observability, Action, AppState, Config, Event, Page, Result, Step,
};

fn main() {
    let config = Config::load();
    observability::init_tracing(&config);

    if let Err(e) = run(&config) {
        let _ = restore_terminal();
        eprintln!("carlog: {e}");
        std::process::exit(1);
    }
}

/// Opens the store, sets up the terminal, and runs the event loop.
fn run(config: &Config) -> Result<()> {
    let mut store = JsonLogStore::open(
        config
            .data_dir()
            .join(carlog::infrastructure::STORAGE_FILE_NAME),
    )?;
    let mut state = initialize(config, store.entries().to_vec());

    // Watcher failure degrades to single-process operation, nothing more.
    let (watch_tx, watch_rx) = mpsc::channel();
    let _watcher = match start_watcher(store.file_path(), watch_tx) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            tracing::warn!(error = %e, "file watcher unavailable, external changes will not refresh");
            None
        }
    };

    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, cursor::Hide)?;

    let result = run_loop(&mut state, &mut store, &watch_rx, config);

    restore_terminal()?;
    result
}

/// Restores the terminal to cooked mode and the main screen.
fn restore_terminal() -> Result<()> {
    execute!(std::io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// The main event loop: poll input, drain watcher notifications, render.
fn run_loop(
    state: &mut AppState,
    store: &mut JsonLogStore,
    watch_rx: &mpsc::Receiver<()>,
    config: &Config,
) -> Result<()> {
    render_frame(state)?;

    loop {
        // Coalesce a burst of watcher notifications into one reload.
        if watch_rx.try_recv().is_ok() {
            while watch_rx.try_recv().is_ok() {}
            if dispatch(state, store, &Event::StorageChanged, config)? {
                return Ok(());
            }
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(app_event) = map_key(state, key.code, key.modifiers) else {
                    continue;
                };
                if dispatch(state, store, &app_event, config)? {
                    return Ok(());
                }
            }
            event::Event::Resize(_, _) => render_frame(state)?,
            _ => {}
        }
    }
}

/// Runs one event through the handler and executes the resulting actions.
///
/// Returns `Ok(true)` when the app should exit. Handler errors are shown in
/// the status line rather than tearing the app down.
fn dispatch(
    state: &mut AppState,
    store: &mut JsonLogStore,
    event: &Event,
    config: &Config,
) -> Result<bool> {
    let (needs_render, actions) = match handle_event(state, store, event) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "event failed");
            state.status = Some(format!("Error: {e}"));
            render_frame(state)?;
            return Ok(false);
        }
    };

    for action in actions {
        match action {
            Action::Quit => return Ok(true),
            Action::ExportLog => {
                match export::export_entries(&config.export_dir(), &state.entries) {
                    Ok(path) => {
                        state.status = Some(format!("Exported to {}", path.display()));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "export failed");
                        state.status = Some(format!("Export failed: {e}"));
                    }
                }
                render_frame(state)?;
            }
        }
    }

    if needs_render {
        render_frame(state)?;
    }
    Ok(false)
}

/// Renders a frame at the current terminal size.
fn render_frame(state: &AppState) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    render(state, rows as usize, cols as usize);
    std::io::stdout().flush()?;
    Ok(())
}

/// Translates a key press into a library event for the active screen.
fn map_key(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    match state.page {
        Page::Log => match code {
            KeyCode::Char('j') | KeyCode::Down => Some(Event::KeyDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::KeyUp),
            KeyCode::Char('d') => Some(Event::RemoveSelected),
            KeyCode::Char('e') => Some(Event::ExportLog),
            KeyCode::Char('l') | KeyCode::Esc => Some(Event::CloseLog),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
        Page::Entry => match state.flow.step {
            Step::Input => match code {
                KeyCode::Char(c) if c.is_ascii_digit() => Some(Event::Digit(c)),
                KeyCode::Backspace => Some(Event::Backspace),
                KeyCode::Enter => Some(Event::ConfirmNumber),
                KeyCode::Char('r') | KeyCode::Esc => Some(Event::ResetInput),
                KeyCode::Char('l') => Some(Event::ShowLog),
                KeyCode::Char('q') => Some(Event::Quit),
                _ => None,
            },
            Step::LinePick => match code {
                KeyCode::Esc => Some(Event::Back),
                KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                    Some(Event::SelectLine(c.to_ascii_uppercase().to_string()))
                }
                _ => None,
            },
            Step::Confirm => match code {
                KeyCode::Enter | KeyCode::Char('y') => Some(Event::ConfirmEntry),
                KeyCode::Esc | KeyCode::Char('n') => Some(Event::CancelEntry),
                _ => None,
            },
        },
    }
}
