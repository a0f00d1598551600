use crate::config::GitHubSettings;
use crate::errors::PulseError;
use crate::github::types::{LanguageBytes, RepoCommit, RepoSummary, UserEvent};
use crate::github::{GitHubApi, COMMITS_PER_PAGE, EVENTS_PER_PAGE, REPOS_PER_PAGE};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Stable REST media type for API v3
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// `reqwest`-backed implementation of [`GitHubApi`]
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(settings: &GitHubSettings) -> Result<Self, PulseError> {
        let mut client_builder = Client::builder().user_agent(settings.user_agent.clone());

        if let Some(secs) = settings.request_timeout_secs {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        let client = client_builder
            .build()
            .map_err(|e| PulseError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: settings.api_base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
        })
    }

    pub fn with_api_base(mut self, api_base: String) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, PulseError> {
        let url = format!("{}{}", self.api_base, endpoint);
        log::debug!("GitHub API request to {}", url);

        let mut request = self.client.get(&url).header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            return Err(PulseError::RateLimited);
        }

        if !status.is_success() {
            return Err(PulseError::UpstreamStatus {
                endpoint: endpoint.split('?').next().unwrap_or(endpoint).to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PulseError::DecodeError(format!("{}: {}", endpoint, e)))
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, PulseError> {
        self.get_json(&format!(
            "/users/{}/repos?sort=updated&per_page={}",
            username, REPOS_PER_PAGE
        ))
        .await
    }

    async fn list_events(&self, username: &str) -> Result<Vec<UserEvent>, PulseError> {
        self.get_json(&format!("/users/{}/events?per_page={}", username, EVENTS_PER_PAGE))
            .await
    }

    async fn repository_languages(&self, full_name: &str) -> Result<LanguageBytes, PulseError> {
        self.get_json(&format!("/repos/{}/languages", full_name)).await
    }

    async fn repository_commits(&self, full_name: &str) -> Result<Vec<RepoCommit>, PulseError> {
        self.get_json(&format!(
            "/repos/{}/commits?per_page={}",
            full_name, COMMITS_PER_PAGE
        ))
        .await
    }
}
