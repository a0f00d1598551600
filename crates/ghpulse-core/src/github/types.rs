//! Raw GitHub REST payloads, trimmed to the fields the aggregator reads

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Entry of `GET /users/{username}/repos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
}

/// Entry of `GET /repos/{full_name}/commits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoCommit {
    pub sha: String,
    pub commit: RepoCommitDetails,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoCommitDetails {
    pub message: String,
    pub author: GitAuthor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitAuthor {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub date: DateTime<Utc>,
}

/// Body of `GET /repos/{full_name}/languages`, in the order GitHub lists it
pub type LanguageBytes = IndexMap<String, u64>;

/// Entry of `GET /users/{username}/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub payload: Option<EventPayload>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserEvent {
    pub const PUSH: &'static str = "PushEvent";

    pub fn is_push(&self) -> bool {
        self.kind == Self::PUSH
    }

    /// Commits carried by the event payload; empty for non-push events.
    pub fn commits(&self) -> &[PushCommit] {
        self.payload
            .as_ref()
            .map(|payload| payload.commits.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushCommit {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub author: Option<PushAuthor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
