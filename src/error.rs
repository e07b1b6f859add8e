//! Top-level error categories for a pipeline run.

use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

/// Which stage of the run failed. The underlying cause is attached as a child.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("invalid configuration")]
    Config,
    #[display("failed to read the {_0} database")]
    Source(#[error(not(source))] &'static str),
    #[display("failed to load commentary")]
    Commentary,
    #[display("failed to write assets")]
    Output,
}

impl ErrorKind {
    /// Returns `true` if running again might succeed without changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Output)
    }
}
