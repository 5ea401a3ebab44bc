//! Observability infrastructure for diagnostics.
//!
//! Wires the `tracing` macros used throughout the crate to a formatted log
//! file in the data directory. Stdout belongs to the UI, so diagnostics never
//! go to the terminal.

pub mod init;

pub use init::init_tracing;
