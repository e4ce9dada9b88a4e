use serde::{Deserialize, Serialize};

use crate::constants::{VERDICT_ORIGINAL, VERDICT_PLAGIARISM};

/// Binary classification of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Plagiarism detected")]
    PlagiarismDetected,
    #[serde(rename = "Mostly original")]
    MostlyOriginal,
}

impl Verdict {
    /// Flags a submission iff `overall_score` is strictly above `threshold`.
    pub fn from_score(overall_score: f64, threshold: f64) -> Self {
        if overall_score > threshold {
            Verdict::PlagiarismDetected
        } else {
            Verdict::MostlyOriginal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::PlagiarismDetected => VERDICT_PLAGIARISM,
            Verdict::MostlyOriginal => VERDICT_ORIGINAL,
        }
    }

    pub fn is_plagiarism(&self) -> bool {
        matches!(self, Verdict::PlagiarismDetected)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closest reference entry for one sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Index into the reference corpus.
    pub index: usize,
    /// Cosine similarity, floored at 0.
    pub similarity: f32,
}

/// One scored sentence. Only `sentence` and `score` go on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    /// The sentence as trimmed from the submission.
    pub sentence: String,
    /// Best-match similarity as a percentage, 2 decimals.
    pub score: f64,
    #[serde(skip)]
    pub similarity: f32,
    #[serde(skip)]
    pub matched_index: usize,
}

impl SentenceScore {
    pub fn new(sentence: impl Into<String>, best: BestMatch) -> Self {
        Self {
            sentence: sentence.into(),
            score: super::similarity::to_percent(f64::from(best.similarity)),
            similarity: best.similarity,
            matched_index: best.index,
        }
    }
}

/// Per-request outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Mean similarity as a percentage, 2 decimals; 0 with no sentences.
    pub overall_score: f64,
    /// One entry per sentence, in input order.
    pub details: Vec<SentenceScore>,
    /// Verdict derived from `overall_score`.
    pub message: Verdict,
}

impl ScoringResult {
    pub fn is_plagiarism(&self) -> bool {
        self.message.is_plagiarism()
    }
}
