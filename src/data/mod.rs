//! Request input segments for the serving pipeline.
//!
//! A request is an ordered list of [`Data`] segments. Each segment reports its
//! length in token-equivalent units and converts to an embedding tensor by
//! delegating to a [`Model`]. The set of segment kinds is closed; adding a
//! kind means adding a variant and handling it at every `match` below.

mod error;
mod limits;
mod model;
mod sequence;
mod tensor;
mod text;
mod token;

pub use error::DataError;
pub use limits::{DataLimits, MAX_INPUT_TOKENS, MAX_TEXT_BYTES};
pub use model::{Model, TokenId};
pub use sequence::{embed_sequence, total_length, validate_sequence};
pub use tensor::EmbeddingTensor;
pub use text::TextData;
pub use token::TokenData;

use serde::{Deserialize, Serialize};

use crate::telemetry::{record_embedding_failure, record_embedding_success, EmbeddingSpan, SpanExt};

/// Segment kinds, used as serde tags and telemetry labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Text,
    Tokens,
}

impl DataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tokens => "tokens",
        }
    }
}

/// One contiguous unit of request input.
///
/// Serialized as an internally tagged object:
/// `{"type":"text","text":"..."}` or `{"type":"tokens","token_ids":[..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Data {
    Text(TextData),
    Tokens(TokenData),
}

impl Data {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextData::new(text))
    }

    pub fn tokens(token_ids: impl Into<TokenData>) -> Self {
        Self::Tokens(token_ids.into())
    }

    pub fn kind(&self) -> DataKind {
        match self {
            Self::Text(_) => DataKind::Text,
            Self::Tokens(_) => DataKind::Tokens,
        }
    }

    /// Length in token-equivalent units. Exact for tokens, estimated for text.
    pub fn length(&self) -> usize {
        match self {
            Self::Text(text) => text.length(),
            Self::Tokens(tokens) => tokens.length(),
        }
    }

    /// Eager, model-independent checks against known bounds.
    pub fn validate(&self, limits: &DataLimits) -> Result<(), DataError> {
        match self {
            Self::Text(text) => text.validate(limits),
            Self::Tokens(tokens) => tokens.validate(limits),
        }
    }

    /// Compute this segment's `[rows, hidden_dim]` embedding with `model`.
    ///
    /// For token segments `rows == self.length()`. For text segments `rows`
    /// is the tokenized length, which may differ from `self.length()`.
    pub fn embedding(&self, model: &dyn Model) -> Result<EmbeddingTensor, DataError> {
        let kind = self.kind().as_str();
        let span = EmbeddingSpan::new(kind, model.model_id(), self.length());
        let _enter = span.enter();

        let result = match self {
            Self::Text(text) => text.embedding(model),
            Self::Tokens(tokens) => tokens.embedding(model),
        };

        span.record_result(&result);
        match &result {
            Ok(tensor) => {
                span.record("rows", tensor.rows());
                record_embedding_success(kind, tensor.rows());
            }
            Err(e) => {
                tracing::warn!(error = %e, error_kind = e.kind(), "segment embedding failed");
                record_embedding_failure(kind, e.kind());
            }
        }
        result
    }

    pub fn as_text(&self) -> Option<&TextData> {
        match self {
            Self::Text(text) => Some(text),
            Self::Tokens(_) => None,
        }
    }

    pub fn as_tokens(&self) -> Option<&TokenData> {
        match self {
            Self::Tokens(tokens) => Some(tokens),
            Self::Text(_) => None,
        }
    }
}

impl From<TextData> for Data {
    fn from(text: TextData) -> Self {
        Self::Text(text)
    }
}

impl From<TokenData> for Data {
    fn from(tokens: TokenData) -> Self {
        Self::Tokens(tokens)
    }
}
