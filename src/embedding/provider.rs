//! The narrow seam between the scoring pipeline and an embedding model.

use std::sync::Arc;

use super::error::EmbeddingError;

/// Maps text to fixed-length dense vectors.
///
/// Implementations must return exactly one vector per input, in input order, and
/// every vector must have [`embedding_dim`](EmbeddingProvider::embedding_dim)
/// components. Vectors from different providers are not comparable.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a batch of strings.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Embeds a single string.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.embed_batch(&[text])?;
        if vectors.len() != 1 {
            return Err(EmbeddingError::CountMismatch {
                expected: 1,
                actual: vectors.len(),
            });
        }
        Ok(vectors.swap_remove(0))
    }

    /// Output dimension, fixed for the provider's lifetime.
    fn embedding_dim(&self) -> usize;

    /// `true` when vectors come from a deterministic stand-in rather than a model.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for Arc<T> {
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed_batch(texts)
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}
