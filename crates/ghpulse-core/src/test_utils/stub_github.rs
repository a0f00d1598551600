//! In-memory [`GitHubApi`] with canned data and call counters

use crate::errors::PulseError;
use crate::github::{GitHubApi, LanguageBytes, RepoCommit, RepoSummary, UserEvent};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub struct StubGitHub {
    pub repos: Result<Vec<RepoSummary>, PulseError>,
    pub events: Option<Result<Vec<UserEvent>, PulseError>>,
    pub languages: HashMap<String, Result<LanguageBytes, PulseError>>,
    pub commits: HashMap<String, Result<Vec<RepoCommit>, PulseError>>,
    pub delay: Option<Duration>,
    repo_calls: AtomicUsize,
}

impl Default for StubGitHub {
    fn default() -> Self {
        Self {
            repos: Ok(Vec::new()),
            events: None,
            languages: HashMap::new(),
            commits: HashMap::new(),
            delay: None,
            repo_calls: AtomicUsize::new(0),
        }
    }
}

impl StubGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, repo: Value) -> Self {
        let repo: RepoSummary = serde_json::from_value(repo).unwrap();
        if let Ok(repos) = self.repos.as_mut() {
            repos.push(repo);
        }
        self
    }

    pub fn with_repos_error(mut self, err: PulseError) -> Self {
        self.repos = Err(err);
        self
    }

    pub fn with_events(mut self, events: Value) -> Self {
        self.events = Some(Ok(serde_json::from_value(events).unwrap()));
        self
    }

    pub fn with_events_error(mut self, err: PulseError) -> Self {
        self.events = Some(Err(err));
        self
    }

    pub fn with_languages(mut self, full_name: &str, languages: Value) -> Self {
        self.languages.insert(
            full_name.to_string(),
            Ok(serde_json::from_value(languages).unwrap()),
        );
        self
    }

    pub fn with_languages_error(mut self, full_name: &str, err: PulseError) -> Self {
        self.languages.insert(full_name.to_string(), Err(err));
        self
    }

    pub fn with_commits(mut self, full_name: &str, commits: Value) -> Self {
        self.commits.insert(
            full_name.to_string(),
            Ok(serde_json::from_value(commits).unwrap()),
        );
        self
    }

    pub fn with_commits_error(mut self, full_name: &str, err: PulseError) -> Self {
        self.commits.insert(full_name.to_string(), Err(err));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times the repository listing was requested, i.e. pipeline runs
    pub fn pipeline_runs(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubApi for StubGitHub {
    async fn list_repositories(&self, _username: &str) -> Result<Vec<RepoSummary>, PulseError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.repos.clone()
    }

    async fn list_events(&self, _username: &str) -> Result<Vec<UserEvent>, PulseError> {
        self.events.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn repository_languages(&self, full_name: &str) -> Result<LanguageBytes, PulseError> {
        self.languages
            .get(full_name)
            .cloned()
            .unwrap_or_else(|| Ok(LanguageBytes::new()))
    }

    async fn repository_commits(&self, full_name: &str) -> Result<Vec<RepoCommit>, PulseError> {
        self.commits
            .get(full_name)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
