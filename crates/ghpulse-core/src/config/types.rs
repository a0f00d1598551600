//! Configuration type definitions
//!
//! Every section is optional in YAML; missing fields fall back to the values
//! the aggregator has always used (three minute freshness window, the public
//! GitHub API endpoint, no token).

use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::errors::PulseError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "ghpulse/0.1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub github: GitHubSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GitHubSettings {
    /// Identity to aggregate. Required at call time, not at load time.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// No timeout beyond the HTTP client's own when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

// Hand-written so the token never ends up in a log line.
impl std::fmt::Debug for GitHubSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubSettings")
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_api_base_url() -> String { DEFAULT_API_BASE_URL.to_string() }
fn default_user_agent() -> String { DEFAULT_USER_AGENT.to_string() }
fn default_ttl_secs() -> u64 { 180 }
fn default_max_entries() -> usize { 64 }
fn default_log_level() -> String { "info".to_string() }

impl PulseConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PulseError> {
        if self.github.api_base_url.trim().is_empty() {
            return Err(PulseError::ConfigError("GitHub API base URL cannot be empty".to_string()));
        }

        if self.github.user_agent.trim().is_empty() {
            return Err(PulseError::ConfigError("User agent cannot be empty".to_string()));
        }

        if self.cache.max_entries == 0 {
            return Err(PulseError::ConfigError("Cache max_entries must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// The identity to aggregate; a missing or blank value is a configuration error.
pub fn require_username(username: Option<&str>) -> Result<&str, PulseError> {
    username
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| PulseError::ConfigError("GITHUB_USERNAME is required".to_string()))
}
