//! Span utilities for segment embedding calls.

use tracing::{info_span, Span};

/// Extension trait for recording an operation's outcome on a span.
pub trait SpanExt {
    /// Record the result of an operation into the span.
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display;
}

impl SpanExt for Span {
    fn record_result<T, E>(&self, result: &Result<T, E>)
    where
        E: std::fmt::Display,
    {
        match result {
            Ok(_) => {
                self.record("status", "ok");
            }
            Err(e) => {
                self.record("status", "error");
                self.record("error.message", e.to_string().as_str());
            }
        }
    }
}

/// Factory for embedding spans.
pub struct EmbeddingSpan;

impl EmbeddingSpan {
    /// Create a span for one segment embedding call.
    ///
    /// `status`, `rows` and `error.message` are filled in after the call.
    pub fn new(kind: &str, model_id: &str, length: usize) -> Span {
        info_span!(
            "embedding",
            kind = %kind,
            model_id = %model_id,
            length = length,
            status = tracing::field::Empty,
            rows = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    }
}
