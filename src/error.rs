//! Error types for the RBM profiling library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Input matrix column count does not match the layer it feeds
    #[error("Shape mismatch in {context}: expected {expected} columns, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A size that must be positive was zero
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A hyperparameter outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Non-finite values in inputs or weight updates
    #[error("Numeric instability: {0}")]
    NumericInstability(String),

    /// A rating cell that is not 0 or 1
    #[error("Invalid rating at row {row}, column {column}: {value:?}")]
    InvalidRating {
        row: usize,
        column: usize,
        value: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading/writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a shape mismatch error
    pub fn shape(context: &'static str, expected: usize, actual: usize) -> Self {
        Error::ShapeMismatch {
            context,
            expected,
            actual,
        }
    }

    /// Whether the error comes from caller-supplied data rather than the model
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::ShapeMismatch { .. } | Error::InvalidRating { .. } | Error::Csv(_)
        )
    }
}
