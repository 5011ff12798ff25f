// Sample data - the built-in data set behind `--offline`
//
// Mirrors what the dashboard shows before a backend is wired up: fixed card
// values, a six-month engagement series, a handful of leaderboard rows and a
// short activity feed.

use crate::account::{Account, Category};
use crate::api::{DashboardStats, EngagementTrend, SearchResponse};
use crate::error::ApiError;
use crate::filter::{LeaderboardQuery, SearchRequest};
use crate::source::{DataSource, RecentActivity};
use chrono::{Duration, Utc};
use std::collections::BTreeMap;

pub const COUNTRIES: [&str; 5] = ["tanzania", "kenya", "uganda", "rwanda", "burundi"];

pub struct SampleData {
    accounts: Vec<Account>,
    stats: DashboardStats,
    activity: Vec<RecentActivity>,
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleData {
    pub fn new() -> Self {
        let accounts = sample_accounts();
        let now = Utc::now();

        let activity = accounts
            .iter()
            .take(3)
            .zip([2, 5, 26])
            .map(|(account, hours_ago)| RecentActivity {
                title: "New Influencer Added".to_string(),
                username: account.username.clone(),
                country: account.country.clone(),
                at: now - Duration::hours(hours_ago),
            })
            .collect();

        Self {
            accounts,
            stats: sample_stats(),
            activity,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn matches_request(account: &Account, request: &SearchRequest) -> bool {
        let topic = request.topic.to_lowercase();
        let text_match = [&account.username, &account.name, &account.location, &account.country]
            .iter()
            .any(|field| field.to_lowercase().contains(&topic));

        text_match
            && request
                .country
                .as_ref()
                .map_or(true, |country| account.country.eq_ignore_ascii_case(country))
            && request.category.map_or(true, |category| account.category == category)
            && request
                .min_followers
                .map_or(true, |min| account.followers_count >= min)
            && request
                .min_engagement
                .map_or(true, |min| account.engagement_score >= min)
    }
}

impl DataSource for SampleData {
    fn describe(&self) -> String {
        "sample data".to_string()
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let mut matched: Vec<Account> = self
            .accounts
            .iter()
            .filter(|account| Self::matches_request(account, request))
            .cloned()
            .collect();

        let key = request.sort_by;
        matched.sort_by(|a, b| key.value_of(b).total_cmp(&key.value_of(a)));

        let total_count = matched.len() as u64;
        let accounts = matched
            .into_iter()
            .skip(request.offset())
            .take(request.limit as usize)
            .collect();

        Ok(SearchResponse {
            accounts,
            total_count,
        })
    }

    async fn leaderboard(&self, query: &LeaderboardQuery) -> Result<Vec<Account>, ApiError> {
        let mut ranked: Vec<Account> = self
            .accounts
            .iter()
            .filter(|account| query.category.matches(account.category))
            .cloned()
            .collect();

        let key = query.sort_by;
        ranked.sort_by(|a, b| key.value_of(b).total_cmp(&key.value_of(a)));
        ranked.truncate(query.limit as usize);

        Ok(ranked)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        Ok(self.stats.clone())
    }

    async fn countries(&self) -> Result<Vec<String>, ApiError> {
        Ok(COUNTRIES.iter().map(|c| c.to_string()).collect())
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        Ok(Category::ALL.iter().map(|c| c.as_str().to_string()).collect())
    }

    fn recent_activity(&self) -> Vec<RecentActivity> {
        self.activity.clone()
    }
}

fn sample_stats() -> DashboardStats {
    let category_distribution: BTreeMap<String, u64> = [("nano", 30), ("micro", 50), ("macro", 20)]
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();

    DashboardStats {
        total_influencers: 1234,
        average_engagement: 4.8,
        active_countries: COUNTRIES.len() as u64,
        category_distribution,
        engagement_trends: EngagementTrend {
            labels: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            data: vec![65.0, 59.0, 80.0, 81.0, 56.0, 55.0],
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn account(
    username: &str,
    name: &str,
    location: &str,
    country: &str,
    followers_count: u64,
    annual_posts: u64,
    thread_count: u64,
    verified: bool,
    engagement_score: f64,
    rank: f64,
) -> Account {
    Account {
        username: username.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        country: country.to_string(),
        followers_count,
        annual_posts,
        thread_count,
        category: Category::from_followers(followers_count),
        verified,
        engagement_score,
        // Daily posting rate weighted with thread creation
        intensity_score: (annual_posts as f64 / 365.0) * 0.7 + thread_count as f64 * 0.3,
        rank,
    }
}

fn sample_accounts() -> Vec<Account> {
    vec![
        account("techboss", "Tech Boss", "Dar es Salaam", "tanzania", 25_000, 450, 12, true, 4.8, 87.5),
        account("nairobidev", "Nairobi Dev Hub", "Nairobi", "kenya", 148_000, 1_200, 30, true, 3.9, 91.2),
        account("kampalacreates", "Kampala Creates", "Kampala", "uganda", 8_400, 620, 5, false, 6.1, 72.4),
        account("kigalitech", "Kigali Tech", "Kigali", "rwanda", 56_000, 980, 22, true, 5.2, 89.0),
        account("zanzibarfoodie", "Zanzibar Foodie", "Zanzibar", "tanzania", 3_200, 400, 2, false, 7.3, 65.8),
        account("mombasavibes", "Mombasa Vibes", "Mombasa", "kenya", 1_250_000, 2_100, 40, true, 2.7, 94.6),
        account("bujumbura_arts", "Bujumbura Arts", "Bujumbura", "burundi", 12_500, 510, 9, false, 4.1, 70.3),
        account("arushaoutdoors", "Arusha Outdoors", "Arusha", "tanzania", 410_000, 730, 15, true, 3.3, 83.1),
        account("jinjaflow", "Jinja Flow", "Jinja", "uganda", 1_900, 380, 1, false, 5.6, 58.9),
        account("gitegalens", "Gitega Lens", "Gitega", "burundi", 9_700, 700, 14, false, 4.4, 68.2),
    ]
}
