//! Error types for windowed dataset construction

use thiserror::Error;

/// Errors raised while framing an hourly series into samples
#[derive(Debug, Error)]
pub enum WindowError {
    /// The lag/horizon/origin configuration is malformed
    #[error("Invalid spec: {0}")]
    InvalidSpec(String),

    /// The series is empty or shorter than the span the framing requires
    #[error("Series too short: {0}")]
    EmptySeries(String),

    /// The dataset holds fewer samples than the requested split needs
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Two consecutive observations are not exactly one hour apart
    #[error("Irregular cadence: {0}")]
    IrregularCadence(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, WindowError>;
