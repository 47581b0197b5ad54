//! Model capability consumed by data segments.
//!
//! The serving engine provides the concrete model. Segments only borrow it for
//! the duration of a call and never own it.

use super::error::DataError;
use super::tensor::EmbeddingTensor;

/// Integer index into a model's vocabulary.
pub type TokenId = i32;

/// What a data segment needs from a loaded model.
///
/// Calls are synchronous and may block for as long as the model needs.
/// Threading, caching and cancellation are the implementor's concern.
pub trait Model: Send + Sync {
    /// Identifier used in log fields.
    fn model_id(&self) -> &str;

    /// Width of each embedding row.
    fn hidden_dim(&self) -> usize;

    /// Convert text to token ids. Fails with [`DataError::Tokenization`].
    fn tokenize(&self, text: &str) -> Result<Vec<TokenId>, DataError>;

    /// Look up embeddings for `token_ids`, one row per id.
    ///
    /// Fails with [`DataError::InvalidInput`] if an id is outside the
    /// vocabulary, or [`DataError::ModelUnavailable`] if the model is not
    /// ready.
    fn embed(&self, token_ids: &[TokenId]) -> Result<EmbeddingTensor, DataError>;
}
