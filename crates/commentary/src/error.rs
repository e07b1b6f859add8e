//! Commentary Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A commentary error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for commentary operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Malformed lines are never errors; they are counted and skipped.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The commentary file is required but does not exist.
    #[display("commentary file not found: {}", _0.display())]
    NotFound(#[error(not(source))] PathBuf),
    /// Reading the commentary file failed part-way through.
    #[display("I/O error reading {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
