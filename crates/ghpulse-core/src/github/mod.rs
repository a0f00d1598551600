//! GitHub REST access for the aggregator
//!
//! The pipeline only ever talks to GitHub through [`GitHubApi`], which keeps
//! the aggregation logic independent of the transport and lets tests swap in
//! canned responses.

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::*;

use crate::errors::PulseError;
use async_trait::async_trait;

/// Page size for the repository listing
pub const REPOS_PER_PAGE: usize = 100;
/// Page size for the public event feed
pub const EVENTS_PER_PAGE: usize = 30;
/// Page size for a repository's commit listing; also caps the per-repository commit count
pub const COMMITS_PER_PAGE: usize = 100;

/// The four read endpoints the aggregator consumes
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Up to [`REPOS_PER_PAGE`] repositories, most recently updated first
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, PulseError>;

    /// Up to [`EVENTS_PER_PAGE`] public events, newest first
    async fn list_events(&self, username: &str) -> Result<Vec<UserEvent>, PulseError>;

    /// Byte count per language for one repository
    async fn repository_languages(&self, full_name: &str) -> Result<LanguageBytes, PulseError>;

    /// Up to [`COMMITS_PER_PAGE`] commits on the default branch
    async fn repository_commits(&self, full_name: &str) -> Result<Vec<RepoCommit>, PulseError>;
}
