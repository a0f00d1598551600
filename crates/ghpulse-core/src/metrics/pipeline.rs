//! Fetch-and-aggregate pipeline run on every cache miss

use crate::errors::PulseError;
use crate::github::GitHubApi;
use crate::metrics::{ActivityAggregator, ActivitySnapshot, LatestCommitResolution};
use chrono::NaiveDate;

/// Collect and aggregate one identity's activity.
///
/// Only a failed repository listing aborts the run. The event feed and the
/// per-repository language and commit calls degrade: a failure is logged and
/// the affected input is left out.
pub async fn collect_activity(
    api: &dyn GitHubApi,
    username: &str,
    today: NaiveDate,
) -> Result<ActivitySnapshot, PulseError> {
    let repos = match api.list_repositories(username).await {
        Ok(repos) => repos,
        Err(PulseError::RateLimited) => {
            log::error!("GitHub API rate limit exceeded while listing repositories for {}", username);
            return Err(PulseError::RateLimited);
        }
        Err(e) => {
            log::error!("Failed to fetch GitHub repositories for {}: {}", username, e);
            return Err(e);
        }
    };

    let events = match api.list_events(username).await {
        Ok(events) => Some(events),
        Err(e) => {
            log::warn!("Failed to fetch events for {}, using repository commits: {}", username, e);
            None
        }
    };

    let resolution = LatestCommitResolution::from_events(events.as_deref());
    if resolution.needs_commit_fallback() {
        log::debug!("No push event for {}, latest commit comes from repository commits", username);
    }

    let mut aggregator = ActivityAggregator::new(today);

    for repo in &repos {
        match api.repository_languages(&repo.full_name).await {
            Ok(languages) => aggregator.add_languages(&languages),
            Err(e) => log::warn!("Skipping languages for {}: {}", repo.full_name, e),
        }

        match api.repository_commits(&repo.full_name).await {
            Ok(commits) => aggregator.add_commits(repo, &commits),
            Err(e) => log::warn!("Skipping commits for {}: {}", repo.full_name, e),
        }
    }

    let total_commits = aggregator.total_commits();
    let snapshot = aggregator.finish(repos.len(), resolution);

    log::info!(
        "Aggregated GitHub data for {} ({} repos, {} commits)",
        username,
        repos.len(),
        total_commits
    );

    Ok(snapshot)
}
