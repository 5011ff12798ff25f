// Configuration - command line flags with environment fallbacks

use crate::account::{CategoryFilter, SortKey};
use crate::filter::{LeaderboardQuery, SearchForm, ALL, DEFAULT_LIMIT};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where and how to reach the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "xea-dashboard")]
#[command(about = "X-EA Awards influencer dashboard")]
#[command(version)]
pub struct Cli {
    /// Base URL of the X-EA Awards API
    #[arg(long, env = "XEA_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// HTTP timeout in seconds
    #[arg(long, env = "XEA_TIMEOUT_SECS", default_value = "30", global = true)]
    pub timeout_secs: u64,

    /// Use the built-in sample data instead of the API
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log filter, e.g. "info" or "xea_dashboard=debug"
    #[arg(long, env = "XEA_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Interactive UI unless a report command was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive terminal dashboard (default)
    Tui,
    /// Print dashboard totals, category split and engagement trend
    Dashboard,
    /// Print the ranked leaderboard
    Leaderboard(LeaderboardArgs),
    /// Search accounts by topic
    Search(SearchArgs),
    /// List supported countries
    Countries,
    /// List influencer categories
    Categories,
    /// Describe the sort metrics, eligibility rules and ranking weights
    Parameters,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct LeaderboardArgs {
    /// all, nano, micro or macro
    #[arg(long, default_value = ALL)]
    pub category: CategoryFilter,

    /// ai_rank, engagement, intensity, followers or posts
    #[arg(long, default_value = "ai_rank")]
    pub sort_by: SortKey,

    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl From<&LeaderboardArgs> for LeaderboardQuery {
    fn from(args: &LeaderboardArgs) -> Self {
        Self {
            category: args.category,
            sort_by: args.sort_by,
            limit: args.limit,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SearchArgs {
    /// Topic, username or name to search for
    pub topic: String,

    #[arg(long, default_value = ALL)]
    pub country: String,

    #[arg(long, default_value = ALL)]
    pub category: String,

    #[arg(long)]
    pub min_followers: Option<String>,

    #[arg(long)]
    pub min_engagement: Option<String>,

    #[arg(long, default_value = "ai_rank")]
    pub sort_by: SortKey,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl From<&SearchArgs> for SearchForm {
    /// Command line flags fill the same form the TUI does, so both paths
    /// share one validation step
    fn from(args: &SearchArgs) -> Self {
        Self {
            query: args.topic.clone(),
            country: args.country.clone(),
            category: args.category.clone(),
            min_followers: args.min_followers.clone().unwrap_or_default(),
            min_engagement: args.min_engagement.clone().unwrap_or_default(),
            sort_by: args.sort_by,
            page: args.page,
            limit: args.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Category;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["xea-dashboard"]).unwrap();
        assert_eq!(cli.command(), Command::Tui);
        assert!(!cli.offline);
        assert!(cli.log_file.is_none());
        // Environment may override in CI; only the timeout default is stable
        assert_eq!(cli.client_config().timeout, Duration::from_secs(cli.timeout_secs));
    }

    #[test]
    fn test_leaderboard_args() {
        let cli = Cli::try_parse_from([
            "xea-dashboard",
            "leaderboard",
            "--category",
            "macro",
            "--sort-by",
            "followers",
            "--limit",
            "5",
            "--offline",
        ])
        .unwrap();

        assert!(cli.offline);
        let Command::Leaderboard(args) = cli.command() else {
            panic!("expected leaderboard command");
        };
        let query = LeaderboardQuery::from(&args);
        assert_eq!(query.category, CategoryFilter::Only(Category::Macro));
        assert_eq!(query.sort_by, SortKey::FollowersCount);
        assert_eq!(query.limit, 5);
    }

    #[test]
    fn test_search_args_fill_form() {
        let cli = Cli::try_parse_from([
            "xea-dashboard",
            "search",
            "tech startups",
            "--country",
            "kenya",
            "--min-engagement",
            "2.5",
        ])
        .unwrap();

        let Command::Search(args) = cli.command() else {
            panic!("expected search command");
        };
        let request = SearchForm::from(&args).to_request().unwrap();
        assert_eq!(request.topic, "tech startups");
        assert_eq!(request.country.as_deref(), Some("kenya"));
        assert_eq!(request.category, None);
        assert_eq!(request.min_followers, None);
        assert_eq!(request.min_engagement, Some(2.5));
    }

    #[test]
    fn test_parameters_command() {
        let cli = Cli::try_parse_from(["xea-dashboard", "parameters"]).unwrap();
        assert_eq!(cli.command(), Command::Parameters);
    }

    #[test]
    fn test_invalid_sort_key_rejected() {
        assert!(Cli::try_parse_from(["xea-dashboard", "leaderboard", "--sort-by", "likes"]).is_err());
    }
}
