//! Configuration module for the activity aggregator
//!
//! Settings come from an optional YAML file and are then overridden from the
//! process environment, so a deployment can run with nothing more than
//! `GITHUB_USERNAME` (and optionally `GITHUB_TOKEN`) exported.

pub mod types;
pub mod loader;

pub use types::*;
pub use loader::*;


use crate::errors::PulseError;
use std::path::Path;

/// Load a configuration from a YAML file, applying environment overrides
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<PulseConfig, PulseError> {
    ConfigLoader::from_file(path).await
}
