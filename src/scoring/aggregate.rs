use tracing::debug;

use super::similarity::to_percent;
use super::types::{ScoringResult, SentenceScore, Verdict};

/// Combines per-sentence scores into the overall score and verdict.
///
/// The mean is taken over raw similarities and scaled/rounded once, so it can
/// differ from the mean of the rounded percentages in the last decimal.
pub fn aggregate(details: Vec<SentenceScore>, threshold: f64) -> ScoringResult {
    let overall_score = if details.is_empty() {
        0.0
    } else {
        let total: f64 = details.iter().map(|d| f64::from(d.similarity)).sum();
        to_percent(total / details.len() as f64)
    };

    let message = Verdict::from_score(overall_score, threshold);

    debug!(
        sentences = details.len(),
        overall_score,
        threshold,
        verdict = %message,
        "Aggregated sentence scores"
    );

    ScoringResult {
        overall_score,
        details,
        message,
    }
}
