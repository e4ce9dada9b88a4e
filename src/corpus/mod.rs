//! Reference corpus: the knowledge base and its precomputed embeddings.
//!
//! Built once at startup via [`ReferenceCorpus::build`] and shared read-only
//! (behind an `Arc`) for the rest of the process. Construction fails instead of
//! producing a partial corpus, so a server never answers from an incomplete one.

mod error;


pub use error::CorpusError;

use std::path::Path;

use tracing::{debug, info};

use crate::embedding::EmbeddingProvider;

/// Built-in knowledge base, in index order.
pub const DEFAULT_KNOWLEDGE_BASE: [&str; 6] = [
    "Artificial Intelligence is transforming the world.",
    "Machine learning allows systems to learn from data.",
    "Plagiarism is presenting someone else's work as your own.",
    "Education requires originality and academic honesty.",
    "Data science combines statistics and computer science to gain insights from data.",
    "Academic writing should always credit the original source.",
];

/// Ordered reference strings plus one embedding per string.
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    entries: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    embedding_dim: usize,
}

impl ReferenceCorpus {
    /// Embeds `entries` in one batched call and assembles the corpus.
    pub fn build<P>(entries: Vec<String>, provider: &P) -> Result<Self, CorpusError>
    where
        P: EmbeddingProvider + ?Sized,
    {
        validate_entries(&entries)?;

        let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
        let embeddings = provider.embed_batch(&refs)?;

        let corpus = Self::from_parts(entries, embeddings)?;
        if corpus.embedding_dim != provider.embedding_dim() {
            return Err(CorpusError::DimensionMismatch {
                index: 0,
                expected: provider.embedding_dim(),
                actual: corpus.embedding_dim,
            });
        }

        info!(
            entries = corpus.len(),
            embedding_dim = corpus.embedding_dim,
            stub = provider.is_stub(),
            "Reference corpus embedded"
        );

        Ok(corpus)
    }

    /// Builds the corpus from the built-in knowledge base.
    pub fn build_default<P>(provider: &P) -> Result<Self, CorpusError>
    where
        P: EmbeddingProvider + ?Sized,
    {
        Self::build(default_entries(), provider)
    }

    /// Assembles a corpus from precomputed embeddings, enforcing its invariants.
    pub fn from_parts(
        entries: Vec<String>,
        embeddings: Vec<Vec<f32>>,
    ) -> Result<Self, CorpusError> {
        validate_entries(&entries)?;

        if entries.len() != embeddings.len() {
            return Err(CorpusError::CountMismatch {
                entries: entries.len(),
                embeddings: embeddings.len(),
            });
        }

        let embedding_dim = embeddings[0].len();
        for (index, embedding) in embeddings.iter().enumerate() {
            if embedding.is_empty() || embedding.len() != embedding_dim {
                return Err(CorpusError::DimensionMismatch {
                    index,
                    expected: embedding_dim,
                    actual: embedding.len(),
                });
            }
        }

        Ok(Self {
            entries,
            embeddings,
            embedding_dim,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed corpus.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }

    pub fn entry(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }
}

/// The built-in knowledge base as owned strings.
pub fn default_entries() -> Vec<String> {
    DEFAULT_KNOWLEDGE_BASE.iter().map(|s| s.to_string()).collect()
}

/// Reads a knowledge base from a JSON file holding an array of strings.
pub fn load_entries(path: &Path) -> Result<Vec<String>, CorpusError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<String> = serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_entries(&entries)?;
    debug!(path = %path.display(), entries = entries.len(), "Loaded knowledge base file");

    Ok(entries)
}

fn validate_entries(entries: &[String]) -> Result<(), CorpusError> {
    if entries.is_empty() {
        return Err(CorpusError::Empty);
    }

    if let Some(index) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(CorpusError::BlankEntry { index });
    }

    Ok(())
}
