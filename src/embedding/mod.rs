//! Embedding + model utilities.
//!
//! - [`provider`] defines the [`EmbeddingProvider`] seam the scoring pipeline depends on.
//! - [`minilm`] provides the BERT sentence embedder and its deterministic stub.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// MiniLM sentence embedder.
pub mod minilm;
/// Embedding provider trait.
pub mod provider;
/// Tokenizer loading helpers.
pub mod utils;

pub use error::EmbeddingError;
pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
pub use provider::EmbeddingProvider;
