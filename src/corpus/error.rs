use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("reference corpus is empty")]
    Empty,

    #[error("reference entry {index} is blank")]
    BlankEntry { index: usize },

    #[error("failed to embed reference corpus: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("corpus has {entries} entries but {embeddings} embeddings")]
    CountMismatch { entries: usize, embeddings: usize },

    #[error("embedding {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to read knowledge base {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("knowledge base {path} is not a JSON array of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
