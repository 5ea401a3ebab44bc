//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge pure state transitions and effectful operations the handler
//! cannot perform itself, like tearing down the terminal or writing an export
//! file. Store mutations are not actions: the handler holds the store handle
//! and commits synchronously, so an append is already persisted by the time
//! the handler returns.

/// Commands for the runtime to execute after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exits the application. State was already flushed on every mutation, so
    /// there is nothing to save on the way out.
    Quit,

    /// Writes the full log to a timestamped JSON file in the export directory.
    ///
    /// Emitted only when the log is non-empty.
    ExportLog,
}
