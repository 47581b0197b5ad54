//! Raw text segment that still needs tokenization.

use serde::{Deserialize, Serialize};

use super::error::DataError;
use super::limits::DataLimits;
use super::model::Model;
use super::tensor::EmbeddingTensor;
use super::token::TokenData;

/// An unprocessed UTF-8 text segment.
///
/// The true token count is only known after the model tokenizes the text, so
/// [`TextData::length`] is an estimate. Callers that need the exact count
/// should call [`TextData::tokenize`] and carry the result as [`TokenData`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextData {
    text: String,
}

impl TextData {
    /// Empty text is permitted.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Estimated length: the number of Unicode scalar values in the text.
    ///
    /// The row count of [`TextData::embedding`] is the tokenizer's length and
    /// usually differs from this value.
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    /// Check the raw byte size against known bounds.
    pub fn validate(&self, limits: &DataLimits) -> Result<(), DataError> {
        if self.text.len() > limits.max_text_bytes {
            return Err(DataError::InvalidInput(format!(
                "text exceeds maximum size: {} > {} bytes",
                self.text.len(),
                limits.max_text_bytes
            )));
        }
        Ok(())
    }

    /// Tokenize with `model`, producing an exact-length segment.
    pub fn tokenize(&self, model: &dyn Model) -> Result<TokenData, DataError> {
        model.tokenize(&self.text).map(TokenData::from)
    }

    /// Tokenize then embed. Tokenization failure aborts before `embed` runs.
    pub fn embedding(&self, model: &dyn Model) -> Result<EmbeddingTensor, DataError> {
        let tokens = self.tokenize(model)?;
        tracing::debug!(
            estimated = self.length(),
            tokenized = tokens.length(),
            "text segment tokenized"
        );
        tokens.embedding(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_scalar_values_not_bytes() {
        let data = TextData::new("héllo");
        assert_eq!(data.text().len(), 6);
        assert_eq!(data.length(), 5);
    }

    #[test]
    fn empty_text_is_valid() {
        let data = TextData::new("");
        assert_eq!(data.length(), 0);
        assert!(data.validate(&DataLimits::default()).is_ok());
    }

    #[test]
    fn validate_rejects_oversized_text() {
        let limits = DataLimits { max_text_bytes: 4, ..Default::default() };
        let data = TextData::new("hello");
        let err = data.validate(&limits).unwrap_err();
        assert_eq!(
            err,
            DataError::InvalidInput("text exceeds maximum size: 5 > 4 bytes".into())
        );
    }
}
