/// Error types for the dataset layer
use thiserror::Error;

/// Errors raised while parsing or querying a [`crate::Table`].
#[derive(Error, Debug)]
pub enum DataError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A requested column does not exist in the table
    #[error("Unknown column: {0}")]
    MissingColumn(String),

    /// A column holds text where numbers were requested
    #[error("Column is not numeric: {0}")]
    NotNumeric(String),
}
