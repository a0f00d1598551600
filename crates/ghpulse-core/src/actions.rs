//! Read operations consumed by the presentation layer
//!
//! Both operations return an [`ActionResult`] and never an error: every
//! failure is turned into a short message that has been checked for
//! credential material before it leaves the crate.

use crate::cache::ActivityCache;
use crate::config::{require_username, PulseConfig};
use crate::errors::PulseError;
use crate::github::{GitHubApi, GitHubClient};
use crate::metrics::{collect_activity, ActivitySnapshot, CodeMetrics, LatestCommit};
use chrono::Local;
use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::sync::{Arc, OnceLock};

pub const COMMIT_FETCH_FAILED: &str = "Failed to fetch commit data";
pub const METRICS_FETCH_FAILED: &str = "Failed to fetch metrics data";
pub const NO_METRICS_FOUND: &str = "No metrics data found";

const MAX_ERROR_MESSAGE_LEN: usize = 80;

/// Success with data, or failure with a caller-safe message
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    Success(T),
    Failure(String),
}

impl<T> ActionResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ActionResult::Success(data) => Some(data),
            ActionResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionResult::Success(_) => None,
            ActionResult::Failure(message) => Some(message),
        }
    }
}

// {"success": true, "data": ...} / {"success": false, "error": "..."}
impl<T: Serialize> Serialize for ActionResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ActionResult", 2)?;
        match self {
            ActionResult::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ActionResult::Failure(message) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", message)?;
            }
        }
        state.end()
    }
}

fn sensitive_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)token|password|secret|key=").expect("sensitive pattern is valid")
    })
}

/// Replace `message` with `fallback` when it is too long or looks like it carries a credential
pub fn sanitize_error_message(message: &str, fallback: &str) -> String {
    if message.chars().count() > MAX_ERROR_MESSAGE_LEN || sensitive_pattern().is_match(message) {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

/// Message shown to callers for a failed operation.
///
/// Configuration errors are reported as such; fetch failures collapse into the
/// operation's generic "no data" message.
fn failure_message(err: &PulseError, no_data: &str, fallback: &str) -> String {
    match err {
        PulseError::ConfigError(_) => sanitize_error_message(&err.to_string(), fallback),
        _ => sanitize_error_message(no_data, fallback),
    }
}

/// Entry point for the presentation layer: one identity, one cache
pub struct ActivityService {
    api: Arc<dyn GitHubApi>,
    cache: ActivityCache,
    username: Option<String>,
}

impl ActivityService {
    /// Build the service with the `reqwest` client described by `config`
    pub fn new(config: &PulseConfig) -> Result<Self, PulseError> {
        config.validate()?;
        let client = GitHubClient::new(&config.github)?;

        Ok(Self {
            api: Arc::new(client),
            cache: ActivityCache::new(&config.cache),
            username: config.github.username.clone(),
        })
    }

    pub fn with_api(api: Arc<dyn GitHubApi>, username: Option<String>, cache: ActivityCache) -> Self {
        Self { api, cache, username }
    }

    fn username(&self) -> Result<&str, PulseError> {
        require_username(self.username.as_deref())
    }

    /// Cached snapshot for the configured identity, fetching on a miss
    pub async fn snapshot(&self) -> Result<Arc<ActivitySnapshot>, PulseError> {
        let username = self.username()?;
        let api = self.api.clone();

        self.cache
            .get_or_fetch(username, || async move {
                collect_activity(api.as_ref(), username, Local::now().date_naive()).await
            })
            .await
    }

    /// Latest commit for the configured identity.
    ///
    /// `None` when the identity has no commits or when the upstream fetch
    /// failed; only configuration errors are reported as a failure.
    pub async fn fetch_latest_commit(&self) -> ActionResult<Option<LatestCommit>> {
        match self.snapshot().await {
            Ok(snapshot) => ActionResult::Success(snapshot.latest_commit.clone()),
            Err(e) if e.is_config() => {
                log::error!("Error in fetch_latest_commit: {}", e);
                ActionResult::Failure(failure_message(&e, COMMIT_FETCH_FAILED, COMMIT_FETCH_FAILED))
            }
            Err(e) => {
                log::warn!("No latest commit available: {}", e);
                ActionResult::Success(None)
            }
        }
    }

    /// Code metrics for the configured identity
    pub async fn fetch_code_metrics(&self) -> ActionResult<CodeMetrics> {
        match self.snapshot().await {
            Ok(snapshot) => ActionResult::Success(snapshot.metrics.clone()),
            Err(e) => {
                log::error!("Error in fetch_code_metrics: {}", e);
                ActionResult::Failure(failure_message(&e, NO_METRICS_FOUND, METRICS_FETCH_FAILED))
            }
        }
    }
}
