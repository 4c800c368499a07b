//! Error types for tablog-output.

use thiserror::Error;

/// Errors that can occur when writing log output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A row carried a key outside the writer's column set while the writer
    /// was bound with the fail-on-unknown policy.  During a schema migration
    /// this means the old header was not a subset of the new column set.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
