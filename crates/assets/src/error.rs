//! Asset Error Types

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An asset error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for asset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Writing an output file (or creating its directory) failed
    #[display("I/O error writing {}", _0.display())]
    Io(#[error(not(source))] PathBuf),
    /// The output location is not writable
    #[display("permission denied: {}", _0.display())]
    PermissionDenied(#[error(not(source))] PathBuf),
    /// A document could not be encoded as JSON
    #[display("failed to serialize {}", _0.display())]
    Serialize(#[error(not(source))] PathBuf),
    /// Unknown output format name
    #[display("unsupported format: {_0} (expected one of v1, v4, v5)")]
    UnsupportedFormat(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
