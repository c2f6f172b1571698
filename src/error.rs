//! Error types for the retail-ts library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while transforming or analysing a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Window size is zero or longer than the series.
    #[error("invalid window size {window} for series of length {len}")]
    InvalidWindow { window: usize, len: usize },

    /// Lag is zero or not shorter than the series.
    #[error("invalid lag {lag} for series of length {len}")]
    InvalidLag { lag: usize, len: usize },

    /// Window step must be positive.
    #[error("invalid window step: {0}")]
    InvalidStep(usize),

    /// Argument with no valid numeric interpretation (unknown method name, NaN threshold).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AnalysisError {
    /// Whether this error reports a degenerate configuration for the given
    /// input (window too large, series too short) rather than a caller mistake.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, AnalysisError::InvalidArgument(_))
    }
}
