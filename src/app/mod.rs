//! Application layer coordinating state, events, and actions.
//!
//! This module implements the event-driven core that powers the app: the entry
//! capture flow and the log screen. It sits between the terminal runtime
//! (main.rs) and the domain/storage layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                            │
//!                            └── Store Handle (append / remove / reload)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and the capture-flow state machine
//! - [`modes`]: Step and page state types
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Page, Step};
pub use state::{AppState, FlowState};
