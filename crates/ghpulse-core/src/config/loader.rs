//! Configuration loader for YAML files and environment resolution

use crate::config::types::*;
use crate::errors::PulseError;
use std::env;
use std::path::Path;
use tokio::fs;

pub const ENV_USERNAME: &str = "GITHUB_USERNAME";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_API_URL: &str = "GITHUB_API_URL";

/// Configuration loader with environment resolution
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an optional file.
    ///
    /// A missing file is not an error: the defaults are used and the
    /// environment fills in the identity and token.
    pub async fn load<P: AsRef<Path>>(path: Option<P>) -> Result<PulseConfig, PulseError> {
        match path {
            Some(path) if path.as_ref().exists() => Self::from_file(path).await,
            Some(path) => {
                log::debug!(
                    "Config file {} not found, using defaults and environment",
                    path.as_ref().display()
                );
                Self::from_defaults()
            }
            None => Self::from_defaults(),
        }
    }

    /// Defaults plus environment overrides
    pub fn from_defaults() -> Result<PulseConfig, PulseError> {
        let mut config = PulseConfig::default();
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<PulseConfig, PulseError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            PulseError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<PulseConfig, PulseError> {
        let mut config: PulseConfig = if content.trim().is_empty() {
            PulseConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Override file values with `GITHUB_USERNAME`, `GITHUB_TOKEN` and `GITHUB_API_URL`
    pub fn apply_env_overrides(config: &mut PulseConfig) {
        if let Some(username) = non_empty_var(ENV_USERNAME) {
            config.github.username = Some(username);
        }

        if let Some(token) = non_empty_var(ENV_TOKEN) {
            config.github.token = Some(token);
        }

        if let Some(api_url) = non_empty_var(ENV_API_URL) {
            config.github.api_base_url = api_url;
        }

        config.github.api_base_url = config.github.api_base_url.trim_end_matches('/').to_string();
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
