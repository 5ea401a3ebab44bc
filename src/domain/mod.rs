//! Core domain types: errors, line codes, and validation rules.
//!
//! This module contains the foundational types used across all layers:
//!
//! - [`error`]: The [`CarlogError`] type and `Result` alias
//! - [`lines`]: The recognized line-code set and car-number validation
//!
//! The domain layer has no dependencies on storage, UI, or the application
//! layer, keeping validation rules reusable from anywhere in the crate.

pub mod error;
pub mod lines;

pub use error::{CarlogError, Result};
pub use lines::{is_recognized_line, is_valid_car_number, LINE_CODES};
