//! Screen and step state types for the application.
//!
//! This module defines the state machine enums that drive the capture flow and
//! screen switching. The step enum is the correctness boundary for entry
//! capture: the handler re-checks every transition guard regardless of what
//! the UI disables.

/// Current step within the entry capture flow.
///
/// The flow always moves `Input` → `LinePick` → `Confirm`, with backward
/// transitions returning to `Input`. The selected line exists only while the
/// step is `Confirm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Accumulating the 4-digit car number.
    ///
    /// Digits append until the number is 4 long; further digits are rejected.
    /// Confirming requires exactly 4 digits.
    Input,

    /// Picking the transit line for the trip.
    ///
    /// Only codes from the recognized set advance to `Confirm`.
    LinePick,

    /// Reviewing the captured car and line before committing.
    ///
    /// Confirming appends to the store and fully resets the flow; cancelling
    /// resets without committing.
    Confirm,
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The entry capture flow (input pad, line grid, confirmation).
    Entry,

    /// The recorded log: table of trips, totals, and the repeat-car leaderboard.
    Log,
}
