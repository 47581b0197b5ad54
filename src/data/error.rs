//! Error types for request data segments.
//!
//! Errors are propagated to the caller unchanged. A failed embedding is never
//! replaced by an empty or default tensor.

use thiserror::Error;

/// Errors that can occur while validating or embedding a data segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Embedding shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
}

impl DataError {
    /// Stable label used for log fields and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Tokenization(_) => "tokenization",
            Self::ModelUnavailable(_) => "model_unavailable",
            Self::ShapeMismatch { .. } => "shape_mismatch",
        }
    }

    /// Returns true if the request itself is at fault and should be rejected
    /// rather than resubmitted once the model is ready.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Tokenization(_))
    }

    pub(crate) fn shape_mismatch(expected: [usize; 2], actual: [usize; 2]) -> Self {
        Self::ShapeMismatch {
            expected: format!("[{}, {}]", expected[0], expected[1]),
            actual: format!("[{}, {}]", actual[0], actual[1]),
        }
    }
}
