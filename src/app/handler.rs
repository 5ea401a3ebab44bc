//! Event handling and state transition logic.
//!
//! This module implements the entry-flow state machine and the log screen's
//! event handling. Events arrive from the terminal loop or the storage
//! watcher; [`handle_event`] pattern-matches the event, mutates state, commits
//! through the store handle where needed, and returns actions for the runtime
//! to execute.
//!
//! Every transition is synchronous and runs to completion before the next
//! event is processed. The handler re-checks every guard itself — the UI
//! disabling a key is a convenience, not the correctness boundary.
//!
//! # The capture flow
//!
//! ```text
//! Input    --(digit, len<4)-->   Input (car_number += digit)
//! Input    --(backspace)-->      Input (car_number truncated by 1)
//! Input    --(reset)-->          Input (car_number cleared)
//! Input    --(confirm, len==4)-> LinePick
//! LinePick --(select line)-->    Confirm (selected_line = line)
//! LinePick --(back)-->           Input
//! Confirm  --(confirm)-->        [store.append] --> Input (full reset), Log screen
//! Confirm  --(cancel)-->         Input (full reset)
//! ```

use crate::app::modes::{Page, Step};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::lines::is_recognized_line;
use crate::storage::backend::LogStore;
use crate::storage::stats;

/// Events triggered by user input or storage notifications.
///
/// Each event represents a discrete occurrence that may cause a state change
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A digit key for the car number ('0'–'9').
    Digit(char),
    /// Removes the last entered digit.
    Backspace,
    /// Clears the accumulated car number.
    ResetInput,
    /// Advances from the input pad to line selection (requires 4 digits).
    ConfirmNumber,
    /// Picks a line at the LinePick step; unrecognized codes are rejected.
    SelectLine(String),
    /// Returns from line selection to the input pad.
    Back,
    /// Commits the captured entry and navigates to the log.
    ConfirmEntry,
    /// Abandons the captured entry and resets the flow.
    CancelEntry,

    /// Opens the log screen.
    ShowLog,
    /// Closes the log screen, returning to the entry flow.
    CloseLog,
    /// Moves the log cursor down.
    KeyDown,
    /// Moves the log cursor up.
    KeyUp,
    /// Deletes the entry under the log cursor.
    RemoveSelected,
    /// Exports the log to a JSON file.
    ExportLog,

    /// The persisted blob changed in another context sharing the same storage.
    StorageChanged,

    /// Exits the application.
    Quit,
}

/// Processes an event, mutates state, and returns `(should_render, actions)`.
///
/// The store handle is passed explicitly: commits and removals happen here,
/// synchronously, and `state.entries` is refreshed from the store before the
/// handler returns, so renders always see the post-mutation collection.
///
/// # Errors
///
/// Propagates storage errors from append and remove. On a failed append the
/// flow state is left intact so the user can retry the same confirmation;
/// nothing is retried automatically.
#[allow(clippy::too_many_lines)]
pub fn handle_event(
    state: &mut AppState,
    store: &mut dyn LogStore,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Digit(digit) => {
            if state.page != Page::Entry || state.flow.step != Step::Input {
                return Ok((false, vec![]));
            }
            Ok((state.flow.push_digit(*digit), vec![]))
        }
        Event::Backspace => {
            if state.page != Page::Entry || state.flow.step != Step::Input {
                return Ok((false, vec![]));
            }
            Ok((state.flow.backspace(), vec![]))
        }
        Event::ResetInput => {
            if state.page != Page::Entry {
                return Ok((false, vec![]));
            }
            state.flow.reset();
            Ok((true, vec![]))
        }
        Event::ConfirmNumber => {
            if state.page != Page::Entry || state.flow.step != Step::Input {
                return Ok((false, vec![]));
            }
            if !state.flow.is_complete_car() {
                tracing::debug!(len = state.flow.car_number.len(), "car number incomplete, ignoring confirm");
                return Ok((false, vec![]));
            }
            state.flow.step = Step::LinePick;
            Ok((true, vec![]))
        }
        Event::SelectLine(code) => {
            if state.page != Page::Entry || state.flow.step != Step::LinePick {
                return Ok((false, vec![]));
            }
            if !is_recognized_line(code) {
                tracing::debug!(code = %code, "unrecognized line code, ignoring");
                return Ok((false, vec![]));
            }
            state.flow.selected_line = Some(code.clone());
            state.flow.step = Step::Confirm;
            Ok((true, vec![]))
        }
        Event::Back => {
            if state.page != Page::Entry || state.flow.step != Step::LinePick {
                return Ok((false, vec![]));
            }
            state.flow.step = Step::Input;
            Ok((true, vec![]))
        }
        Event::ConfirmEntry => {
            if state.page != Page::Entry || state.flow.step != Step::Confirm {
                return Ok((false, vec![]));
            }
            // Normal transitions guarantee both of these; re-check anyway since
            // this is the commit boundary.
            let Some(line) = state.flow.selected_line.clone() else {
                tracing::debug!("confirm without a selected line, ignoring");
                return Ok((false, vec![]));
            };
            if !state.flow.is_complete_car() {
                tracing::debug!("confirm without a complete car number, ignoring");
                return Ok((false, vec![]));
            }

            // A failed append propagates here with the flow untouched, so the
            // same confirmation can be retried by the user.
            let entries = store.append(&state.flow.car_number, &line, None)?;
            state.entries = entries.to_vec();

            tracing::info!(car = %state.flow.car_number, line = %line, "trip recorded");
            state.status = Some(format!(
                "Logged car {} on the {}",
                state.flow.car_number, line
            ));
            state.flow.reset();
            state.page = Page::Log;
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::CancelEntry => {
            if state.page != Page::Entry || state.flow.step != Step::Confirm {
                return Ok((false, vec![]));
            }
            state.flow.reset();
            Ok((true, vec![]))
        }
        Event::ShowLog => {
            state.page = Page::Log;
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::CloseLog => {
            if state.page != Page::Log {
                return Ok((false, vec![]));
            }
            state.page = Page::Entry;
            state.status = None;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            if state.page != Page::Log {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.page != Page::Log {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::RemoveSelected => {
            if state.page != Page::Log {
                return Ok((false, vec![]));
            }
            let sorted = stats::sorted_recent(&state.entries);
            let Some(target) = sorted.get(state.selected_index) else {
                return Ok((false, vec![]));
            };

            let removed = store.remove(target)?;
            if !removed {
                return Ok((false, vec![]));
            }
            state.entries = store.entries().to_vec();
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::ExportLog => {
            if state.page != Page::Log || state.entries.is_empty() {
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::ExportLog]))
        }
        Event::StorageChanged => {
            store.reload();
            if store.entries() == state.entries.as_slice() {
                tracing::debug!("storage notification with no visible change");
                return Ok((false, vec![]));
            }
            tracing::debug!(entry_count = store.entries().len(), "refreshed view after external change");
            state.entries = store.entries().to_vec();
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::JsonLogStore;
    use crate::ui::theme::Theme;

    fn setup(dir: &tempfile::TempDir) -> (AppState, JsonLogStore) {
        let store = JsonLogStore::open(dir.path().join("train-car-logger.json")).unwrap();
        let state = AppState::new(store.entries().to_vec(), Theme::default());
        (state, store)
    }

    fn dispatch(state: &mut AppState, store: &mut JsonLogStore, event: Event) -> bool {
        handle_event(state, store, &event).unwrap().0
    }

    fn type_car(state: &mut AppState, store: &mut JsonLogStore, car: &str) {
        for c in car.chars() {
            dispatch(state, store, Event::Digit(c));
        }
    }

    #[test]
    fn confirm_with_incomplete_number_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        type_car(&mut state, &mut store, "123");
        assert!(!dispatch(&mut state, &mut store, Event::ConfirmNumber));
        assert_eq!(state.flow.step, Step::Input);
        assert_eq!(state.flow.car_number, "123");
    }

    #[test]
    fn confirm_with_complete_number_advances_to_line_pick() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        type_car(&mut state, &mut store, "1234");
        assert!(dispatch(&mut state, &mut store, Event::ConfirmNumber));
        assert_eq!(state.flow.step, Step::LinePick);
        assert!(state.flow.selected_line.is_none());
    }

    #[test]
    fn digits_beyond_four_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        type_car(&mut state, &mut store, "1234");
        assert!(!dispatch(&mut state, &mut store, Event::Digit('5')));
        assert_eq!(state.flow.car_number, "1234");
    }

    #[test]
    fn line_selection_sets_line_only_at_confirm_step() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        // Selecting a line from the input step does nothing.
        assert!(!dispatch(&mut state, &mut store, Event::SelectLine("A".into())));
        assert!(state.flow.selected_line.is_none());

        type_car(&mut state, &mut store, "1234");
        dispatch(&mut state, &mut store, Event::ConfirmNumber);
        assert!(dispatch(&mut state, &mut store, Event::SelectLine("A".into())));
        assert_eq!(state.flow.step, Step::Confirm);
        assert_eq!(state.flow.selected_line.as_deref(), Some("A"));
    }

    #[test]
    fn unrecognized_line_is_rejected_at_line_pick() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        type_car(&mut state, &mut store, "1234");
        dispatch(&mut state, &mut store, Event::ConfirmNumber);
        assert!(!dispatch(&mut state, &mut store, Event::SelectLine("X".into())));
        assert_eq!(state.flow.step, Step::LinePick);
        assert!(state.flow.selected_line.is_none());
    }

    #[test]
    fn back_returns_to_input_keeping_the_number() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        type_car(&mut state, &mut store, "1234");
        dispatch(&mut state, &mut store, Event::ConfirmNumber);
        assert!(dispatch(&mut state, &mut store, Event::Back));
        assert_eq!(state.flow.step, Step::Input);
        assert_eq!(state.flow.car_number, "1234");
    }

    #[test]
    fn commit_appends_resets_and_navigates_to_log() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        type_car(&mut state, &mut store, "4523");
        dispatch(&mut state, &mut store, Event::ConfirmNumber);
        dispatch(&mut state, &mut store, Event::SelectLine("A".into()));
        assert!(dispatch(&mut state, &mut store, Event::ConfirmEntry));

        assert_eq!(state.flow, crate::app::state::FlowState::new());
        assert_eq!(state.page, Page::Log);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].car, "4523");
        assert_eq!(state.entries[0].line, "A");

        // The commit was persisted, not just staged.
        store.reload();
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn repeat_sighting_shows_up_in_aggregates() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        for _ in 0..2 {
            dispatch(&mut state, &mut store, Event::CloseLog);
            type_car(&mut state, &mut store, "4523");
            dispatch(&mut state, &mut store, Event::ConfirmNumber);
            dispatch(&mut state, &mut store, Event::SelectLine("A".into()));
            dispatch(&mut state, &mut store, Event::ConfirmEntry);
        }

        assert_eq!(stats::count_for_car(&state.entries, "4523"), 2);
        assert!(stats::repeat_cars(&state.entries).contains("4523"));
    }

    #[test]
    fn cancel_resets_without_committing() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        type_car(&mut state, &mut store, "4523");
        dispatch(&mut state, &mut store, Event::ConfirmNumber);
        dispatch(&mut state, &mut store, Event::SelectLine("A".into()));
        assert!(dispatch(&mut state, &mut store, Event::CancelEntry));

        assert_eq!(state.flow, crate::app::state::FlowState::new());
        assert_eq!(state.page, Page::Entry);
        assert!(state.entries.is_empty());
        assert!(store.entries().is_empty());
    }

    #[test]
    fn remove_deletes_the_selected_row() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        store.append("1111", "A", Some(10)).unwrap();
        store.append("2222", "C", Some(20)).unwrap();
        state.entries = store.entries().to_vec();

        dispatch(&mut state, &mut store, Event::ShowLog);
        // Cursor on the newest entry (2222), delete it.
        assert!(dispatch(&mut state, &mut store, Event::RemoveSelected));
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].car, "1111");
    }

    #[test]
    fn storage_change_refreshes_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        // Another context writes to the shared file.
        std::fs::write(
            store.file_path(),
            r#"{"data": [{"timestamp": 7, "car": "7777", "line": "7"}]}"#,
        )
        .unwrap();

        assert!(dispatch(&mut state, &mut store, Event::StorageChanged));
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].car, "7777");

        // Same notification again: view already matches, no render needed.
        assert!(!dispatch(&mut state, &mut store, Event::StorageChanged));
    }

    #[test]
    fn export_is_skipped_for_an_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        dispatch(&mut state, &mut store, Event::ShowLog);
        let (_, actions) = handle_event(&mut state, &mut store, &Event::ExportLog).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn export_emits_an_action_when_entries_exist() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        store.append("1111", "A", Some(10)).unwrap();
        state.entries = store.entries().to_vec();
        dispatch(&mut state, &mut store, Event::ShowLog);

        let (_, actions) = handle_event(&mut state, &mut store, &Event::ExportLog).unwrap();
        assert_eq!(actions, vec![Action::ExportLog]);
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut store) = setup(&dir);

        let (_, actions) = handle_event(&mut state, &mut store, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
