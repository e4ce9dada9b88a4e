//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Threshold could not be parsed or lies outside 0..=100.
    #[error("invalid threshold '{value}': must be a number between 0 and 100")]
    InvalidThreshold { value: String },

    /// Embedding timeout could not be parsed or is zero.
    #[error("invalid embedding timeout '{value}': must be a positive number of milliseconds")]
    InvalidTimeout { value: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Neither a model directory nor the stub embedder was configured.
    #[error("PLAGCHECK_MODEL_PATH is required (set PLAGCHECK_STUB_EMBEDDER=1 to score with the non-semantic stub)")]
    ModelPathRequired,

    /// Both a model directory and the stub embedder were configured.
    #[error("PLAGCHECK_MODEL_PATH and PLAGCHECK_STUB_EMBEDDER are mutually exclusive")]
    ConflictingEmbedder,

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
