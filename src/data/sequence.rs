//! Helpers for callers that assemble a request from several segments.

use super::error::DataError;
use super::limits::DataLimits;
use super::model::Model;
use super::tensor::EmbeddingTensor;
use super::Data;

/// Sum of segment lengths. Text segments contribute their estimate.
pub fn total_length(segments: &[Data]) -> usize {
    segments.iter().map(Data::length).sum()
}

/// Validate every segment, then the summed length, before any model call.
pub fn validate_sequence(segments: &[Data], limits: &DataLimits) -> Result<(), DataError> {
    for (i, segment) in segments.iter().enumerate() {
        segment.validate(limits).map_err(|e| match e {
            DataError::InvalidInput(msg) => {
                DataError::InvalidInput(format!("segment {}: {}", i, msg))
            }
            other => other,
        })?;
    }
    let total = total_length(segments);
    if total > limits.max_input_tokens {
        return Err(DataError::InvalidInput(format!(
            "request exceeds maximum length: {} > {} tokens",
            total, limits.max_input_tokens
        )));
    }
    Ok(())
}

/// Embed segments in declared order and stack the rows.
///
/// Stops at the first failing segment.
pub fn embed_sequence(segments: &[Data], model: &dyn Model) -> Result<EmbeddingTensor, DataError> {
    let parts = segments
        .iter()
        .map(|segment| segment.embedding(model))
        .collect::<Result<Vec<_>, _>>()?;
    EmbeddingTensor::concat(model.hidden_dim(), &parts)
}
