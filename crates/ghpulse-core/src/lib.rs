//! Core library for aggregating a GitHub user's recent activity.
//!
//! Given an identity, the crate pulls repositories, commits, languages and the
//! public event feed from the GitHub REST API, folds them into a compact set of
//! metrics and memoizes the result for a short freshness window so repeated
//! callers do not burn through the API rate limit.
//!
//! # Architecture Overview
//!
//! - **Fetcher** ([`github`]): the [`GitHubApi`] trait and its `reqwest` client
//! - **Aggregator** ([`metrics`]): language totals, a 30-day commit timeline and
//!   latest-commit resolution
//! - **Cache** ([`cache`]): time-boxed, bounded, single-flight memo per identity
//! - **Actions** ([`actions`]): the two read operations consumed by the
//!   presentation layer, with sanitized failure messages
//! - **Configuration** ([`config`]): YAML file plus environment overrides

pub mod actions;
pub mod cache;
pub mod config;
pub mod errors;
pub mod github;
pub mod metrics;

pub use actions::{ActionResult, ActivityService};
pub use cache::{ActivityCache, CacheStats};
pub use config::*;
pub use errors::PulseError;
pub use github::{GitHubApi, GitHubClient};
pub use metrics::{ActivitySnapshot, CodeMetrics, LanguageStat, LatestCommit, TimelineBucket};

#[cfg(test)]
pub mod test_utils;
