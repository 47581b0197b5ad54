//! GG-CORE serving data model.
//!
//! Request input arrives as an ordered list of segments: raw text that still
//! needs tokenization, or pre-tokenized id sequences. Every segment reports a
//! length in token-equivalent units and converts to a `[rows, hidden_dim]`
//! embedding tensor through the [`data::Model`] capability supplied by the
//! inference engine.
//!
//! # Boundaries
//!
//! - Tokenizers, inference kernels, batching and KV-cache placement live in
//!   the engine and are reached only through [`data::Model`].
//! - Segments are immutable values. They never own the model.

pub mod config;
pub mod data;
pub mod telemetry;

pub use data::{
    embed_sequence, total_length, validate_sequence, Data, DataError, DataKind, DataLimits,
    EmbeddingTensor, Model, TextData, TokenData, TokenId,
};
