//! Error types for the activity pipeline
//!
//! Variants follow the failure taxonomy of the aggregator: configuration
//! problems, upstream rate limiting, other upstream or transport failures, and
//! undecodable payloads. Partial per-repository failures and the latest-commit
//! fallback never surface as errors; they are logged where they happen.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PulseError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("GitHub API rate limit exceeded")]
    RateLimited,
    #[error("GitHub API request to {endpoint} failed with HTTP {status}")]
    UpstreamStatus { endpoint: String, status: u16 },
    #[error("HTTP request failed: {0}")]
    HttpError(String),
    #[error("Failed to decode GitHub response: {0}")]
    DecodeError(String),
}

impl PulseError {
    /// Whether the error comes from the configuration rather than a fetch.
    pub fn is_config(&self) -> bool {
        matches!(self, PulseError::ConfigError(_))
    }
}

impl From<reqwest::Error> for PulseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PulseError::DecodeError(err.to_string())
        } else {
            PulseError::HttpError(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for PulseError {
    fn from(err: serde_yaml::Error) -> Self {
        PulseError::ConfigError(format!("Failed to parse YAML config: {}", err))
    }
}
