//! HTTP client for the X-EA Awards API.
//!
//! Thin typed wrapper over the backend's REST endpoints. Non-2xx responses
//! surface as [`ApiError::Status`]; there is no retry or caching.

use crate::account::Account;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::filter::{LeaderboardQuery, SearchRequest};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

// ============================================================================
// API Response Types
// ============================================================================

/// Page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    pub accounts: Vec<Account>,
    pub total_count: u64,
}

/// Monthly engagement series for the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngagementTrend {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl EngagementTrend {
    /// `(label, value)` pairs; extra entries on either side are dropped
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }
}

/// Aggregates behind the dashboard cards and charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    pub total_influencers: u64,
    pub average_engagement: f64,
    pub active_countries: u64,
    #[serde(default)]
    pub category_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub engagement_trends: EngagementTrend,
}

// ============================================================================
// Client
// ============================================================================

const NO_PARAMS: &[(&str, &str)] = &[];

/// Client for the X-EA Awards API
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.api_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(config.api_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /search`
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        self.get_json("/search", request).await
    }

    /// `GET /leaderboard/{category}`
    pub async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Vec<Account>, ApiError> {
        let path = format!("/leaderboard/{}", urlencoding::encode(query.category.as_str()));
        let params = [
            ("sort_by", query.sort_by.as_param().to_string()),
            ("limit", query.limit.to_string()),
        ];
        self.get_json(&path, &params).await
    }

    /// `GET /dashboard/stats`
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/stats", NO_PARAMS).await
    }

    /// `GET /countries`
    pub async fn countries(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/countries", NO_PARAMS).await
    }

    /// `GET /categories`
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/categories", NO_PARAMS).await
    }

    async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let resp = self.client.get(&url).query(query).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(resp.json().await?)
    }
}
