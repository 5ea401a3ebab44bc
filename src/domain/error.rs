//! Error types for carlog.
//!
//! This module defines the centralized error type [`CarlogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for carlog operations.
///
/// This enum consolidates all error conditions that can occur while recording
/// entries, from input validation to storage failures. Variants that wrap
/// underlying errors from external crates use `#[from]` for automatic conversion.
///
/// Validation errors never mutate state: the offending operation is rejected
/// synchronously and the caller's view is left exactly as it was.
#[derive(Debug, Error)]
pub enum CarlogError {
    /// Input failed validation.
    ///
    /// Occurs when a car number is not exactly 4 ASCII digits or a line code
    /// is outside the recognized set. The string describes the rejected input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage operation failed.
    ///
    /// Occurs when serializing, persisting, or exporting the log fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for carlog operations.
///
/// This is a type alias for `std::result::Result<T, CarlogError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CarlogError>;
