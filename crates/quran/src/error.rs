//! Quran Model Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A model error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A chapter, verse or word number fell outside its valid range.
    #[display("{field} out of range: {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
    },
    /// A textual key could not be parsed.
    #[display("failed to parse {field}, found value: {value}")]
    ParseError {
        field: &'static str,
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Source data is static, the same input will always fail the same way.
        false
    }
}
