//! Command-line front end for the GitHub activity aggregator
//!
//! Runs the same read operations the dashboard consumes and prints their
//! tagged results as JSON, which makes it handy for checking a token or an
//! identity before wiring them into a deployment.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ghpulse_core::{config::ConfigLoader, ActivityService};
use log::LevelFilter;
use serde_json::json;

#[derive(Parser, Debug)]
#[clap(author, version, about = "ghpulse - GitHub activity metrics for one identity")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(long, short, default_value = "ghpulse.yaml", help = "Configuration file (optional; environment variables override it)")]
    config: String,

    #[clap(long, short, help = "Log level; defaults to the configured level")]
    log_level: Option<String>,

    #[clap(long, short, help = "GitHub username to aggregate (overrides GITHUB_USERNAME)")]
    username: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the most recent commit
    Commit,
    /// Print language, timeline and commit metrics
    Metrics,
    /// Print both results
    Snapshot,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load(Some(&cli.config)).await?;
    // An empty flag means no identity, which the operations report themselves
    if let Some(username) = cli.username {
        config.github.username = Some(username).filter(|name| !name.trim().is_empty());
    }

    // Initialize logger
    let level = cli.log_level.unwrap_or_else(|| config.logging.level.clone());
    let log_level_filter = level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    log::debug!("Loaded configuration: {:?}", config.github);

    let service = ActivityService::new(&config)?;

    let (output, success) = match cli.command {
        Commands::Commit => {
            let result = service.fetch_latest_commit().await;
            let success = result.is_success();
            (serde_json::to_value(&result)?, success)
        }
        Commands::Metrics => {
            let result = service.fetch_code_metrics().await;
            let success = result.is_success();
            (serde_json::to_value(&result)?, success)
        }
        Commands::Snapshot => {
            let commit = service.fetch_latest_commit().await;
            let metrics = service.fetch_code_metrics().await;
            let success = commit.is_success() && metrics.is_success();
            (json!({ "latestCommit": commit, "metrics": metrics }), success)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if !success {
        anyhow::bail!("GitHub activity could not be fetched");
    }

    Ok(())
}
