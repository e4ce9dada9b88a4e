//! MiniLM sentence embedder (BERT + mean pooling, safetensors + tokenizer).
//!
//! Use [`MiniLmConfig::stub`] for tests/examples without model files. The stub
//! hashes content words into buckets, so identical sentences embed identically
//! and sentences without shared words land near zero similarity.

/// MiniLM configuration.
pub mod config;
pub(crate) mod model;

#[cfg(test)]
mod tests;

pub use config::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig};

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::embedding::device::{device_label, select_device};
use crate::embedding::error::EmbeddingError;
use crate::embedding::provider::EmbeddingProvider;
use crate::embedding::utils::load_batch_tokenizer;

use model::SentenceEncoder;

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "to",
    "of", "in", "for", "on", "with", "at", "by", "from", "as", "into", "and", "but", "if", "or",
    "so", "than", "too", "very", "this", "that", "these", "those", "it", "its",
];

enum EmbedderBackend {
    Model {
        encoder: SentenceEncoder,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
}

/// Sentence embedder backed by all-MiniLM-L6-v2 (or any BERT sentence-transformer).
pub struct MiniLmEmbedder {
    backend: EmbedderBackend,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEmbedder")
            .field("backend", &self.mode())
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl MiniLmEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!(
                embedding_dim = config.embedding_dim,
                "MiniLM running in STUB mode (testing only)"
            );
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        }

        let device = select_device();
        debug!(device = device_label(&device), "Selected compute device for MiniLM");

        let encoder =
            SentenceEncoder::load(&config.config_path(), &config.weights_path(), &device)
                .map_err(|e| EmbeddingError::ModelLoadFailed {
                    reason: format!("Failed to load BERT encoder: {}", e),
                })?;

        if encoder.hidden_size() != config.embedding_dim {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim,
                    encoder.hidden_size()
                ),
            });
        }

        let tokenizer = load_batch_tokenizer(&config.model_dir, config.max_seq_len)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            device = device_label(&device),
            "MiniLM model loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Loads a stub embedder.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(MiniLmConfig::stub())
    }

    fn embed_batch_with_model(
        &self,
        texts: &[&str],
        encoder: &SentenceEncoder,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let encodings = tokenizer.encode_batch(texts.to_vec(), true).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: e.to_string(),
            }
        })?;

        debug!(
            batch = texts.len(),
            seq_len = encodings.first().map(|e| e.get_ids().len()).unwrap_or(0),
            "Generating embeddings (transformer forward pass)"
        );

        let ids = encodings
            .iter()
            .map(|e| Tensor::new(e.get_ids(), device))
            .collect::<Result<Vec<_>, _>>()?;
        let masks = encodings
            .iter()
            .map(|e| Tensor::new(e.get_attention_mask(), device))
            .collect::<Result<Vec<_>, _>>()?;

        let input_ids = Tensor::stack(&ids, 0)?;
        let attention_mask = Tensor::stack(&masks, 0)?;

        let pooled = encoder.forward(&input_ids, &attention_mask).map_err(|e| {
            EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            }
        })?;

        let vectors = pooled.to_vec2::<f32>()?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }

        Ok(vectors.into_iter().map(normalize).collect())
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        let dim = self.config.embedding_dim;
        let mut embedding = vec![0.0f32; dim];

        let lowered = text.to_lowercase();
        for word in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty() && !STOP_WORDS.contains(&w))
        {
            let digest = blake3::hash(word.as_bytes());
            let mut prefix = [0u8; 8];
            prefix.copy_from_slice(&digest.as_bytes()[..8]);
            let bucket = (u64::from_le_bytes(prefix) % dim as u64) as usize;
            embedding[bucket] += 1.0;
        }

        normalize(embedding)
    }

    /// `"model"` or `"stub"`.
    pub fn mode(&self) -> &'static str {
        match self.backend {
            EmbedderBackend::Model { .. } => "model",
            EmbedderBackend::Stub => "stub",
        }
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl EmbeddingProvider for MiniLmEmbedder {
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_batch_with_model(texts, encoder, tokenizer, device),
            EmbedderBackend::Stub => {
                debug!(batch = texts.len(), "Generating stub embeddings");
                Ok(texts.iter().map(|text| self.embed_stub(text)).collect())
            }
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
