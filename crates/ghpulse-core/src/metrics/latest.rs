//! Latest-commit resolution
//!
//! The public event feed sees pushes to every branch, so a push event is the
//! preferred source. When the feed is unavailable or holds no usable push, the
//! newest default-branch commit seen across all repositories is used instead.

use crate::github::{RepoCommit, RepoSummary, UserEvent};
use crate::metrics::{CommitAuthor, CommitSummary, LatestCommit, RepositoryRef};
use chrono::Utc;

const SHORT_SHA_LEN: usize = 7;
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Which source supplies the latest commit
#[derive(Debug, Clone, PartialEq)]
pub enum LatestCommitResolution {
    /// A push event yielded a commit; repository commits are not consulted
    FromEvents(LatestCommit),
    /// Use the newest default-branch commit instead
    FallbackToCommits,
}

impl LatestCommitResolution {
    /// Resolve from the event feed. `None` means the feed could not be fetched.
    pub fn from_events(events: Option<&[UserEvent]>) -> Self {
        match events.and_then(commit_from_first_push) {
            Some(commit) => LatestCommitResolution::FromEvents(commit),
            None => LatestCommitResolution::FallbackToCommits,
        }
    }

    /// The single condition that switches to the commit-based method.
    pub fn needs_commit_fallback(&self) -> bool {
        matches!(self, LatestCommitResolution::FallbackToCommits)
    }

    /// Final answer given the newest repository commit observed during aggregation
    pub fn resolve(self, newest: NewestCommit) -> Option<LatestCommit> {
        match self {
            LatestCommitResolution::FromEvents(commit) => Some(commit),
            LatestCommitResolution::FallbackToCommits => newest.into_inner(),
        }
    }
}

/// First line of a commit message
pub fn first_line(message: &str) -> &str {
    message.split('\n').next().unwrap_or_default()
}

/// Seven-character hash prefix, or the whole hash when shorter
pub fn short_sha(sha: &str) -> String {
    sha.get(..SHORT_SHA_LEN).unwrap_or(sha).to_string()
}

/// Only the first push event is considered; an empty push does not look further.
fn commit_from_first_push(events: &[UserEvent]) -> Option<LatestCommit> {
    let event = events.iter().find(|event| event.is_push())?;
    let commit = event.commits().first()?;

    let repo_name = event
        .repo
        .as_ref()
        .map(|repo| repo.name.clone())
        .unwrap_or_default();
    let short_name = repo_name.rsplit('/').next().unwrap_or(repo_name.as_str()).to_string();
    let author = commit.author.as_ref();

    Some(LatestCommit {
        sha: short_sha(&commit.sha),
        commit: CommitSummary {
            message: first_line(commit.message.as_deref().unwrap_or_default()).to_string(),
            author: CommitAuthor {
                name: author
                    .and_then(|a| a.name.clone())
                    .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
                email: author.and_then(|a| a.email.clone()).unwrap_or_default(),
                date: event.created_at.unwrap_or_else(Utc::now),
            },
        },
        html_url: format!("https://github.com/{}/commit/{}", repo_name, commit.sha),
        repository: RepositoryRef {
            name: short_name,
            full_name: repo_name.clone(),
            html_url: format!("https://github.com/{}", repo_name),
        },
    })
}

/// Tracks the default-branch commit with the greatest author timestamp
#[derive(Debug, Clone, Default)]
pub struct NewestCommit {
    candidate: Option<LatestCommit>,
}

impl NewestCommit {
    /// Replace the candidate only on a strictly later timestamp; first seen wins ties.
    pub fn observe(&mut self, repo: &RepoSummary, commit: &RepoCommit) {
        let is_newer = self
            .candidate
            .as_ref()
            .map_or(true, |current| commit.commit.author.date > current.commit.author.date);

        if is_newer {
            self.candidate = Some(LatestCommit {
                sha: short_sha(&commit.sha),
                commit: CommitSummary {
                    message: first_line(&commit.commit.message).to_string(),
                    author: CommitAuthor {
                        name: commit.commit.author.name.clone(),
                        email: commit.commit.author.email.clone(),
                        date: commit.commit.author.date,
                    },
                },
                html_url: commit.html_url.clone(),
                repository: RepositoryRef {
                    name: repo.name.clone(),
                    full_name: repo.full_name.clone(),
                    html_url: repo.html_url.clone(),
                },
            });
        }
    }

    pub fn into_inner(self) -> Option<LatestCommit> {
        self.candidate
    }
}
