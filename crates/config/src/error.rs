//! Configuration Error Types

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration loading.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The merged configuration could not be parsed into [`Config`](crate::Config)
    #[display("failed to load configuration")]
    Load,
    /// An explicitly requested configuration file does not exist
    #[display("configuration file not found: {}", _0.display())]
    InvalidPath(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Configuration errors need the user to fix something; retrying won't help.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
