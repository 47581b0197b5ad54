//! Metrics facade recording for segment embeddings.
//!
//! No exporter is installed here; the embedding host decides where the
//! `metrics` recorder sends values.

use metrics::{counter, histogram};

/// Count a successful embedding and its row count.
pub fn record_embedding_success(kind: &'static str, rows: usize) {
    counter!("gg_serve_embedding_total", "kind" => kind).increment(1);
    histogram!("gg_serve_embedding_rows", "kind" => kind).record(rows as f64);
}

/// Count a failed embedding by error kind.
pub fn record_embedding_failure(kind: &'static str, error: &'static str) {
    counter!("gg_serve_embedding_failures_total", "kind" => kind, "error" => error).increment(1);
}
