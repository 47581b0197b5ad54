//! Pre-tokenized segment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::DataError;
use super::limits::DataLimits;
use super::model::{Model, TokenId};
use super::tensor::EmbeddingTensor;

/// An immutable, ordered list of token ids.
///
/// Clones share the id buffer. The embedding of a `TokenData` always has
/// exactly [`TokenData::length`] rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenData {
    token_ids: Arc<[TokenId]>,
}

impl TokenData {
    /// Build from an already shared id sequence.
    pub fn new(token_ids: Arc<[TokenId]>) -> Self {
        Self { token_ids }
    }

    pub fn token_ids(&self) -> &[TokenId] {
        &self.token_ids
    }

    /// The shared id buffer, without copying.
    pub fn shared_ids(&self) -> Arc<[TokenId]> {
        Arc::clone(&self.token_ids)
    }

    /// Exact number of tokens.
    pub fn length(&self) -> usize {
        self.token_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }

    /// Check the segment against known bounds. Vocabulary range is left to
    /// the model.
    pub fn validate(&self, limits: &DataLimits) -> Result<(), DataError> {
        if self.length() > limits.max_input_tokens {
            return Err(DataError::InvalidInput(format!(
                "token segment exceeds maximum length: {} > {} tokens",
                self.length(),
                limits.max_input_tokens
            )));
        }
        self.reject_negative_ids()
    }

    /// Embed the ids with `model`.
    ///
    /// Negative ids are rejected before the model is called. A model that
    /// returns anything other than `[length, hidden_dim]` is reported as
    /// [`DataError::ShapeMismatch`].
    pub fn embedding(&self, model: &dyn Model) -> Result<EmbeddingTensor, DataError> {
        self.reject_negative_ids()?;
        let tensor = model.embed(&self.token_ids)?;
        let expected = [self.length(), model.hidden_dim()];
        if tensor.shape() != expected {
            return Err(DataError::shape_mismatch(expected, tensor.shape()));
        }
        Ok(tensor)
    }

    fn reject_negative_ids(&self) -> Result<(), DataError> {
        match self.token_ids.iter().position(|&id| id < 0) {
            Some(pos) => Err(DataError::InvalidInput(format!(
                "negative token id {} at position {}",
                self.token_ids[pos], pos
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<TokenId>> for TokenData {
    fn from(token_ids: Vec<TokenId>) -> Self {
        Self::new(token_ids.into())
    }
}

impl From<&[TokenId]> for TokenData {
    fn from(token_ids: &[TokenId]) -> Self {
        Self::new(token_ids.into())
    }
}

impl FromIterator<TokenId> for TokenData {
    fn from_iter<I: IntoIterator<Item = TokenId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
