// X-EA Awards Dashboard - Core Library
// Exposes the API client, formatting and filter helpers for the CLI, TUI and tests

pub mod account;
pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod report;
pub mod sample;
pub mod source;

// Re-export commonly used types
pub use account::{Account, Category, CategoryFilter, ParseEnumError, SortKey};
pub use api::{ApiClient, DashboardStats, EngagementTrend, SearchResponse};
pub use config::{Cli, ClientConfig, Command};
pub use error::{ApiError, DashboardError, FilterError};
pub use filter::{LeaderboardQuery, SearchForm, SearchRequest};
pub use format::{format_number, format_percent, format_score};
pub use sample::SampleData;
pub use source::{DataSource, RecentActivity, Source};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
