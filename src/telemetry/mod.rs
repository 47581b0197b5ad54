//! Telemetry for the serving data model.
//!
//! Structured logging, per-call spans and metrics facade counters.

mod logging;
mod metrics;
mod spans;

pub use logging::{init_logging, LogConfig, LogError, LogFormat};
pub use self::metrics::{record_embedding_failure, record_embedding_success};
pub use spans::{EmbeddingSpan, SpanExt};
