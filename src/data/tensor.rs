//! Dense 2-D embedding tensor returned by a model.

use super::error::DataError;

/// Row-major `[rows, hidden_dim]` tensor of `f32` embedding values.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTensor {
    rows: usize,
    hidden_dim: usize,
    values: Vec<f32>,
}

impl EmbeddingTensor {
    /// Wrap `values` as a `[rows, hidden_dim]` tensor.
    ///
    /// Fails if `values.len() != rows * hidden_dim`.
    pub fn new(rows: usize, hidden_dim: usize, values: Vec<f32>) -> Result<Self, DataError> {
        let expected = rows.checked_mul(hidden_dim).ok_or_else(|| {
            DataError::InvalidInput(format!("tensor shape [{}, {}] overflows", rows, hidden_dim))
        })?;
        if values.len() != expected {
            return Err(DataError::ShapeMismatch {
                expected: format!("{} values for [{}, {}]", expected, rows, hidden_dim),
                actual: format!("{} values", values.len()),
            });
        }
        Ok(Self { rows, hidden_dim, values })
    }

    /// A tensor with zero rows.
    pub fn empty(hidden_dim: usize) -> Self {
        Self { rows: 0, hidden_dim, values: Vec::new() }
    }

    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.hidden_dim]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn hidden_dim(&self) -> usize {
        self.hidden_dim
    }

    /// Embedding vector at `index`, if in range.
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.hidden_dim;
        Some(&self.values[start..start + self.hidden_dim])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }

    /// Concatenate tensors along the row axis, preserving order.
    ///
    /// All parts must share `hidden_dim`.
    pub fn concat(hidden_dim: usize, parts: &[EmbeddingTensor]) -> Result<Self, DataError> {
        if let Some(part) = parts.iter().find(|p| p.hidden_dim != hidden_dim) {
            return Err(DataError::shape_mismatch([part.rows, hidden_dim], part.shape()));
        }
        let rows = parts
            .iter()
            .try_fold(0usize, |acc, p| acc.checked_add(p.rows))
            .ok_or_else(|| DataError::InvalidInput("concatenated row count overflows".into()))?;
        let mut values = Vec::with_capacity(parts.iter().map(|p| p.values.len()).sum());
        for part in parts {
            values.extend_from_slice(&part.values);
        }
        Ok(Self { rows, hidden_dim, values })
    }
}
