//! Error types for dataset loading and request validation.
//!
//! Only structural problems are errors here. Filtering and aggregation never
//! fail: an empty selection simply produces an empty view.

use polars::prelude::PolarsError;

/// Result type for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Error type for explorer operations
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    #[error("Invalid value in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        column: String,
        row: usize,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown visualization: {0}")]
    UnknownVisualization(String),
}

impl ExplorerError {
    pub(crate) fn invalid_value(column: &str, row: usize, reason: impl Into<String>) -> Self {
        ExplorerError::InvalidValue {
            column: column.to_string(),
            row,
            reason: reason.into(),
        }
    }
}
