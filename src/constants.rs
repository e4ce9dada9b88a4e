//! Cross-cutting, shared constants.
//!
//! The embedding dimension is fixed by the provider for the process lifetime. The
//! values here are defaults for the bundled MiniLM model and the stub embedder.

/// Output dimension of all-MiniLM-L6-v2 (and the stub embedder by default).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens per sentence fed to the encoder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Overall score (0-100) above which a submission is flagged.
pub const DEFAULT_PLAGIARISM_THRESHOLD: f64 = 30.0;

/// Decimal places kept on every reported score.
pub const SCORE_DECIMALS: i32 = 2;

/// Upper bound on a single request's embedding work.
pub const DEFAULT_EMBED_TIMEOUT_MS: u64 = 10_000;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Verdict label when the overall score exceeds the threshold.
pub const VERDICT_PLAGIARISM: &str = "Plagiarism detected";

/// Verdict label otherwise.
pub const VERDICT_ORIGINAL: &str = "Mostly original";

/// Client error message for blank submissions.
pub const NO_TEXT_PROVIDED: &str = "No text provided";
