//! Plagcheck library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Server configuration from `PLAGCHECK_*` env vars
//! - [`MiniLmEmbedder`], [`MiniLmConfig`], [`EmbeddingProvider`] - Sentence embeddings
//! - [`ReferenceCorpus`] - Knowledge base plus precomputed embeddings
//! - [`PlagiarismChecker`], [`ScoringResult`], [`Verdict`] - The scoring pipeline
//! - [`gateway`] - Axum router exposing `POST /check`

pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod gateway;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use corpus::{CorpusError, DEFAULT_KNOWLEDGE_BASE, ReferenceCorpus};
pub use embedding::{EmbeddingError, EmbeddingProvider, MiniLmConfig, MiniLmEmbedder};
pub use scoring::{
    PlagiarismChecker, ScoringError, ScoringResult, SentenceScore, SimilarityScorer, Verdict,
};
