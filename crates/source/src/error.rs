//! Source Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A source database error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for source database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The database file does not exist; check the configured path.
    #[display("database not found: {}", _0.display())]
    NotFound(#[error(not(source))] PathBuf),
    /// Opening or querying the database failed (wrong schema, corrupt file).
    #[display("database error")]
    Database,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
