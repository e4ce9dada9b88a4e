//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `PLAGCHECK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_EMBED_TIMEOUT_MS, DEFAULT_PLAGIARISM_THRESHOLD, DEFAULT_PORT};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PLAGCHECK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `5000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Lowers the default log level to `debug` when `RUST_LOG` is unset.
    pub debug: bool,

    /// Directory holding the MiniLM model (`config.json`, `tokenizer.json`,
    /// `model.safetensors`). Required unless `stub_embedder` is set.
    pub model_path: Option<PathBuf>,

    /// Scores with the hashed bag-of-words stub instead of a model. Opt-in only;
    /// mutually exclusive with `model_path`.
    pub stub_embedder: bool,

    /// JSON file (array of strings) replacing the built-in knowledge base.
    pub knowledge_base_path: Option<PathBuf>,

    /// Overall score above which a submission is flagged. Default: `30`.
    pub threshold: f64,

    /// Upper bound on embedding one request's sentences. Default: 10s.
    pub embed_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            debug: false,
            model_path: None,
            stub_embedder: false,
            knowledge_base_path: None,
            threshold: DEFAULT_PLAGIARISM_THRESHOLD,
            embed_timeout: Duration::from_millis(DEFAULT_EMBED_TIMEOUT_MS),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "PLAGCHECK_PORT";
    const ENV_BIND_ADDR: &'static str = "PLAGCHECK_BIND_ADDR";
    const ENV_DEBUG: &'static str = "PLAGCHECK_DEBUG";
    const ENV_MODEL_PATH: &'static str = "PLAGCHECK_MODEL_PATH";
    const ENV_STUB_EMBEDDER: &'static str = "PLAGCHECK_STUB_EMBEDDER";
    const ENV_KNOWLEDGE_BASE: &'static str = "PLAGCHECK_KNOWLEDGE_BASE";
    const ENV_THRESHOLD: &'static str = "PLAGCHECK_THRESHOLD";
    const ENV_EMBED_TIMEOUT_MS: &'static str = "PLAGCHECK_EMBED_TIMEOUT_MS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let debug = Self::parse_bool_from_env(Self::ENV_DEBUG, defaults.debug);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let stub_embedder =
            Self::parse_bool_from_env(Self::ENV_STUB_EMBEDDER, defaults.stub_embedder);
        let knowledge_base_path = Self::parse_optional_path_from_env(Self::ENV_KNOWLEDGE_BASE);
        let threshold = Self::parse_threshold_from_env(defaults.threshold)?;
        let embed_timeout = Self::parse_timeout_from_env(defaults.embed_timeout)?;

        Ok(Self {
            port,
            bind_addr,
            debug,
            model_path,
            stub_embedder,
            knowledge_base_path,
            threshold,
            embed_timeout,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold.to_string(),
            });
        }

        if self.embed_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: "0".to_string(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.knowledge_base_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        match (&self.model_path, self.stub_embedder) {
            (None, false) => Err(ConfigError::ModelPathRequired),
            (Some(_), true) => Err(ConfigError::ConflictingEmbedder),
            _ => Ok(()),
        }
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is not set.
    pub fn default_log_directive(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_threshold_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_THRESHOLD) {
            Ok(value) => match value.trim().parse::<f64>() {
                Ok(threshold) if (0.0..=100.0).contains(&threshold) => Ok(threshold),
                _ => Err(ConfigError::InvalidThreshold { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_EMBED_TIMEOUT_MS) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
                _ => Err(ConfigError::InvalidTimeout { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .ok()
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(default)
    }
}
