//! Error types for the load_forecast crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the load_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from invalid parameters
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The forecaster needs more history than it was given
    #[error("Insufficient history: {0}")]
    InsufficientHistory(String),

    /// Error raised while framing a series into samples
    #[error("Windowing error: {0}")]
    WindowError(#[from] load_window::WindowError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV serialization
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from report serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}
