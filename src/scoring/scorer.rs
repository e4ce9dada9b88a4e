use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::corpus::ReferenceCorpus;
use crate::embedding::EmbeddingProvider;

use super::error::ScoringError;
use super::similarity::cosine_similarity;
use super::types::{BestMatch, SentenceScore};

/// Scores sentences against the shared reference corpus.
#[derive(Clone)]
pub struct SimilarityScorer {
    corpus: Arc<ReferenceCorpus>,
    provider: Arc<dyn EmbeddingProvider>,
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("corpus_entries", &self.corpus.len())
            .field("embedding_dim", &self.corpus.embedding_dim())
            .field("stub", &self.provider.is_stub())
            .finish()
    }
}

impl SimilarityScorer {
    pub fn new(corpus: Arc<ReferenceCorpus>, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { corpus, provider }
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    pub fn provider(&self) -> &dyn EmbeddingProvider {
        self.provider.as_ref()
    }

    /// Embeds one sentence and scores it.
    pub fn score_sentence(&self, sentence: &str) -> Result<SentenceScore, ScoringError> {
        let embedding = self.provider.embed(sentence)?;
        self.score_embedding(sentence, &embedding)
    }

    /// Scores a sentence whose embedding is already known.
    pub fn score_embedding(
        &self,
        sentence: &str,
        embedding: &[f32],
    ) -> Result<SentenceScore, ScoringError> {
        let best = self.best_match(embedding)?;

        debug!(
            sentence_len = sentence.len(),
            matched_index = best.index,
            similarity = best.similarity,
            "Scored sentence"
        );

        Ok(SentenceScore::new(sentence, best))
    }

    /// Highest cosine similarity between `embedding` and any reference entry.
    ///
    /// Negative similarities are floored at 0 so scores stay within 0..=100.
    pub fn best_match(&self, embedding: &[f32]) -> Result<BestMatch, ScoringError> {
        if self.corpus.is_empty() {
            return Err(ScoringError::EmptyCorpus);
        }

        if embedding.len() != self.corpus.embedding_dim() {
            return Err(ScoringError::DimensionMismatch {
                expected: self.corpus.embedding_dim(),
                actual: embedding.len(),
            });
        }

        self.corpus
            .embeddings()
            .iter()
            .enumerate()
            .map(|(index, reference)| BestMatch {
                index,
                similarity: cosine_similarity(embedding, reference),
            })
            // First maximum wins on ties.
            .reduce(|best, candidate| {
                match candidate
                    .similarity
                    .partial_cmp(&best.similarity)
                    .unwrap_or(Ordering::Less)
                {
                    Ordering::Greater => candidate,
                    _ => best,
                }
            })
            .map(|best| BestMatch {
                similarity: best.similarity.clamp(0.0, 1.0),
                ..best
            })
            .ok_or(ScoringError::EmptyCorpus)
    }
}
