use std::io;

use thiserror::Error;

/// Library-wide error type for racelist operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// CSV read or parse failure (unreadable source, malformed row).
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Result file missing at the configured path.
    #[error("Result file not found: {0}")]
    ResultFileNotFound(String),

    /// A required column is absent from a file's header row.
    #[error("Column '{column}' missing from header of {path}")]
    MissingColumn { column: String, path: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}
