//! Similarity scoring pipeline.
//!
//! [`split_sentences`] → [`SimilarityScorer`] (best cosine match against the
//! [`ReferenceCorpus`](crate::corpus::ReferenceCorpus)) → [`aggregate`].
//! [`PlagiarismChecker`] runs the whole thing for one submission.

pub mod aggregate;
pub mod checker;
pub mod error;
pub mod scorer;
pub mod similarity;
pub mod splitter;
pub mod types;


pub use aggregate::aggregate;
pub use checker::PlagiarismChecker;
pub use error::ScoringError;
pub use scorer::SimilarityScorer;
pub use similarity::{cosine_similarity, round_to, to_percent};
pub use splitter::{sentence_count, split_sentences};
pub use types::{BestMatch, ScoringResult, SentenceScore, Verdict};
