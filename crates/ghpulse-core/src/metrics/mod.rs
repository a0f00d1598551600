//! Derived activity metrics
//!
//! Raw GitHub payloads are folded into these types by [`ActivityAggregator`].
//! Field names serialize in the shape the presentation layer already reads
//! (`totalCommits`, `commitsOverTime`, ...).

pub mod aggregator;
pub mod languages;
pub mod latest;
pub mod pipeline;
pub mod timeline;

pub use aggregator::ActivityAggregator;
pub use languages::{LanguageTotals, TOP_LANGUAGES};
pub use latest::{LatestCommitResolution, NewestCommit};
pub use pipeline::collect_activity;
pub use timeline::{CommitTimeline, TIMELINE_DAYS};


use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The most recent commit found for an identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestCommit {
    /// First seven characters of the commit hash
    pub sha: String,
    pub commit: CommitSummary,
    pub html_url: String,
    pub repository: RepositoryRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// First line of the commit message
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    pub bytes: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetrics {
    /// Sum of fetched commit pages; capped per repository, so an approximation
    pub total_commits: usize,
    pub total_repos: usize,
    pub languages: Vec<LanguageStat>,
    pub commits_over_time: Vec<TimelineBucket>,
}

/// Everything one aggregation produces; cached and shared as a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    pub latest_commit: Option<LatestCommit>,
    pub metrics: CodeMetrics,
}
