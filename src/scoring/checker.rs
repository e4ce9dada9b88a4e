use std::sync::Arc;

use tracing::{debug, info};

use crate::constants::DEFAULT_PLAGIARISM_THRESHOLD;
use crate::corpus::ReferenceCorpus;
use crate::embedding::EmbeddingProvider;

use super::aggregate::aggregate;
use super::error::ScoringError;
use super::scorer::SimilarityScorer;
use super::splitter::split_sentences;
use super::types::ScoringResult;

/// The full pipeline: split, embed (one batch per submission), score, aggregate.
#[derive(Debug, Clone)]
pub struct PlagiarismChecker {
    scorer: SimilarityScorer,
    threshold: f64,
}

impl PlagiarismChecker {
    pub fn new(corpus: Arc<ReferenceCorpus>, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            scorer: SimilarityScorer::new(corpus, provider),
            threshold: DEFAULT_PLAGIARISM_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Scores a submission.
    ///
    /// Blank submissions are rejected with [`ScoringError::EmptySubmission`]. A
    /// non-blank submission with no sentences (e.g. `"..."`) scores 0.
    pub fn check(&self, text: &str) -> Result<ScoringResult, ScoringError> {
        if text.trim().is_empty() {
            return Err(ScoringError::EmptySubmission);
        }

        let sentences: Vec<&str> = split_sentences(text).collect();
        if sentences.is_empty() {
            debug!(text_len = text.len(), "Submission has no sentences");
            return Ok(aggregate(Vec::new(), self.threshold));
        }

        let embeddings = self.scorer.provider().embed_batch(&sentences)?;
        if embeddings.len() != sentences.len() {
            return Err(ScoringError::CountMismatch {
                expected: sentences.len(),
                actual: embeddings.len(),
            });
        }

        let details = sentences
            .iter()
            .zip(&embeddings)
            .map(|(sentence, embedding)| self.scorer.score_embedding(sentence, embedding))
            .collect::<Result<Vec<_>, _>>()?;

        let result = aggregate(details, self.threshold);

        info!(
            sentences = result.details.len(),
            overall_score = result.overall_score,
            verdict = %result.message,
            "Submission scored"
        );

        Ok(result)
    }
}
