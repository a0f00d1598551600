use crate::github::{LanguageBytes, RepoCommit, RepoSummary};
use crate::metrics::{
    ActivitySnapshot, CodeMetrics, CommitTimeline, LanguageTotals, LatestCommitResolution,
    NewestCommit,
};
use chrono::NaiveDate;

/// Folds per-repository payloads into an [`ActivitySnapshot`].
///
/// Every operation only adds counts or keeps a maximum, so the order in which
/// repositories are fed does not change the result.
#[derive(Debug, Clone)]
pub struct ActivityAggregator {
    languages: LanguageTotals,
    timeline: CommitTimeline,
    newest: NewestCommit,
    total_commits: usize,
}

impl ActivityAggregator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            languages: LanguageTotals::new(),
            timeline: CommitTimeline::ending_on(today),
            newest: NewestCommit::default(),
            total_commits: 0,
        }
    }

    pub fn add_languages(&mut self, languages: &LanguageBytes) {
        self.languages.add(languages);
    }

    /// Count a repository's commit page. Commits outside the timeline window
    /// still count toward the total.
    pub fn add_commits(&mut self, repo: &RepoSummary, commits: &[RepoCommit]) {
        self.total_commits += commits.len();

        for commit in commits {
            self.timeline.record_timestamp(commit.commit.author.date);
            self.newest.observe(repo, commit);
        }
    }

    pub fn total_commits(&self) -> usize {
        self.total_commits
    }

    pub fn finish(self, total_repos: usize, resolution: LatestCommitResolution) -> ActivitySnapshot {
        ActivitySnapshot {
            latest_commit: resolution.resolve(self.newest),
            metrics: CodeMetrics {
                total_commits: self.total_commits,
                total_repos,
                languages: self.languages.top(),
                commits_over_time: self.timeline.into_buckets(),
            },
        }
    }
}
