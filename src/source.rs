// Data sources - where the dashboard's numbers come from
//
// The UI and the reports are written against `DataSource` so they run the
// same way against the live API and the built-in sample data.

use crate::account::Account;
use crate::api::{ApiClient, DashboardStats, SearchResponse};
use crate::error::ApiError;
use crate::filter::{LeaderboardQuery, SearchRequest};
use chrono::{DateTime, Utc};

/// Entry in the dashboard's activity feed
#[derive(Debug, Clone, PartialEq)]
pub struct RecentActivity {
    pub title: String,
    pub username: String,
    pub country: String,
    pub at: DateTime<Utc>,
}

/// Read-only access to accounts, aggregates and taxonomy lists
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Short label for headers and logs ("api http://..." / "sample data")
    fn describe(&self) -> String;

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;

    async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Vec<Account>, ApiError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError>;

    async fn countries(&self) -> Result<Vec<String>, ApiError>;

    async fn categories(&self) -> Result<Vec<String>, ApiError>;

    /// Activity feed; the API has no endpoint for it
    fn recent_activity(&self) -> Vec<RecentActivity> {
        Vec::new()
    }
}

impl DataSource for ApiClient {
    fn describe(&self) -> String {
        format!("api {}", self.base_url())
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        ApiClient::search(self, request).await
    }

    async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Vec<Account>, ApiError> {
        ApiClient::leaderboard(self, query).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        ApiClient::dashboard_stats(self).await
    }

    async fn countries(&self) -> Result<Vec<String>, ApiError> {
        ApiClient::countries(self).await
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        ApiClient::categories(self).await
    }
}

/// Either source, picked at startup from `--offline`
pub enum Source {
    Api(ApiClient),
    Sample(crate::sample::SampleData),
}

impl DataSource for Source {
    fn describe(&self) -> String {
        match self {
            Source::Api(client) => client.describe(),
            Source::Sample(sample) => sample.describe(),
        }
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        match self {
            Source::Api(client) => DataSource::search(client, request).await,
            Source::Sample(sample) => sample.search(request).await,
        }
    }

    async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Vec<Account>, ApiError> {
        match self {
            Source::Api(client) => DataSource::leaderboard(client, query).await,
            Source::Sample(sample) => sample.leaderboard(query).await,
        }
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        match self {
            Source::Api(client) => DataSource::dashboard_stats(client).await,
            Source::Sample(sample) => sample.dashboard_stats().await,
        }
    }

    async fn countries(&self) -> Result<Vec<String>, ApiError> {
        match self {
            Source::Api(client) => DataSource::countries(client).await,
            Source::Sample(sample) => sample.countries().await,
        }
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        match self {
            Source::Api(client) => DataSource::categories(client).await,
            Source::Sample(sample) => sample.categories().await,
        }
    }

    fn recent_activity(&self) -> Vec<RecentActivity> {
        match self {
            Source::Api(client) => client.recent_activity(),
            Source::Sample(sample) => sample.recent_activity(),
        }
    }
}
