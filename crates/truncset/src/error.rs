//! Error types for oracle construction and batch handling.

use thiserror::Error;

/// Errors raised around oracle evaluation.
///
/// Evaluating a well-formed rank-2 batch never fails. These errors come
/// from the boundaries: reshaping dynamic arrays, assembling batches from
/// rows and building oracles from specs.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Shape error from the underlying array computation, passed through as-is.
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Ragged batch: row {row} has {got} logits, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Invalid bound: {0} (must be finite and > 0)")]
    InvalidBound(f32),

    #[error("Invalid temperature: {0} (must be finite)")]
    InvalidTemperature(f32),

    #[error("Spec error: {0}")]
    Spec(#[from] serde_json::Error),
}

/// Result type for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;
