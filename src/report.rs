// Plain-text reports for the non-interactive commands

use crate::account::{Account, Category, SortKey};
use crate::api::{DashboardStats, SearchResponse};
use crate::filter::{LeaderboardQuery, SearchRequest};
use crate::format::{format_number, format_percent, format_relative, format_score, title_case};
use crate::sample::COUNTRIES;
use crate::source::RecentActivity;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Width of the longest bar in the category and trend charts
const BAR_WIDTH: f64 = 30.0;

/// Components of the backend's AI rank and their weights (percent)
const RANK_WEIGHTS: [(&str, &str, u32); 3] = [
    ("Engagement", "likes, retweets, replies", 40),
    ("Posting Intensity", "frequency and threads", 40),
    ("Follower Base", "audience size", 20),
];

/// Posts per year an account needs before the backend ranks it
const MIN_ANNUAL_POSTS: u64 = 365;

pub fn dashboard(stats: &DashboardStats, activity: &[RecentActivity], now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📊 Dashboard");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  Total Influencers   {}", format_number(stats.total_influencers));
    let _ = writeln!(out, "  Average Engagement  {}", format_percent(stats.average_engagement));
    let _ = writeln!(out, "  Active Countries    {}", stats.active_countries);

    let _ = writeln!(out, "\n📈 Engagement Trends");
    let points: Vec<(&str, f64)> = stats.engagement_trends.points().collect();
    if points.is_empty() {
        let _ = writeln!(out, "  (no data)");
    }
    let max = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    for (label, value) in &points {
        let _ = writeln!(out, "  {:<4} {:<30} {:.1}", label, bar(*value, max), value);
    }

    let _ = writeln!(out, "\n🏅 Influencer Categories");
    if stats.category_distribution.is_empty() {
        let _ = writeln!(out, "  (no data)");
    }
    let total: u64 = stats.category_distribution.values().sum();
    let max = stats.category_distribution.values().copied().max().unwrap_or(0) as f64;
    for (name, count) in &stats.category_distribution {
        let share = if total == 0 { 0.0 } else { *count as f64 * 100.0 / total as f64 };
        let _ = writeln!(
            out,
            "  {:<6} {:<30} {} ({})",
            title_case(name),
            bar(*count as f64, max),
            count,
            format_percent(share)
        );
    }

    if !activity.is_empty() {
        let _ = writeln!(out, "\n🕒 Recent Activity");
        for entry in activity {
            let _ = writeln!(
                out,
                "  {} - @{} ({})  {}",
                entry.title,
                entry.username,
                title_case(&entry.country),
                format_relative(now, entry.at)
            );
        }
    }

    out
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let width = ((value / max) * BAR_WIDTH).round().max(1.0) as usize;
    "█".repeat(width)
}

pub fn leaderboard(query: &LeaderboardQuery, accounts: &[Account]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "🏆 Leaderboard - {} (by {})",
        query.category.label(),
        query.sort_by.label()
    );
    let _ = writeln!(out, "{}", RULE);

    if accounts.is_empty() {
        let _ = writeln!(out, "  No influencers ranked yet.");
        return out;
    }

    for (idx, account) in accounts.iter().enumerate() {
        let _ = writeln!(
            out,
            "#{:<3} {}{}  {} • {}",
            idx + 1,
            account.handle(),
            if account.verified { " ✓" } else { "" },
            account.name,
            title_case(&account.country)
        );
        let _ = writeln!(
            out,
            "     Followers {:>7}   Engagement {:>6}   Posts {:>6}",
            format_number(account.followers_count),
            format_percent(account.engagement_score),
            format_number(account.annual_posts)
        );
    }

    out
}

/// Detailed card for one account, as listed in search results
pub fn account_card(account: &Account) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", account.handle(), account.name);
    let _ = writeln!(
        out,
        "  📍 {} ({})",
        account.location,
        title_case(&account.country)
    );
    let _ = writeln!(out, "  🏅 Category: {} Influencer", account.category.label());
    let _ = writeln!(out, "  👥 Followers: {}", format_number(account.followers_count));
    let _ = writeln!(out, "  📊 Annual Posts: {}", format_number(account.annual_posts));
    let _ = writeln!(out, "  🧵 Threads: {}", account.thread_count);
    let _ = writeln!(
        out,
        "  ⭐ AI Rank: {}  Engagement: {}  Intensity: {}",
        format_score(account.rank),
        format_score(account.engagement_score),
        format_score(account.intensity_score)
    );
    if account.verified {
        let _ = writeln!(out, "  ✓ Verified account");
    }

    out
}

pub fn search(request: &SearchRequest, response: &SearchResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🔍 Search Results for '{}'", request.topic);
    let _ = writeln!(out, "{}", RULE);

    if response.accounts.is_empty() {
        let _ = writeln!(out, "❌ No accounts found matching the criteria.");
        let _ = writeln!(out, "\nTry:");
        let _ = writeln!(out, "- Using different search terms");
        let _ = writeln!(out, "- Broadening your topic");
        let _ = writeln!(out, "- Relaxing the follower or engagement thresholds");
        return out;
    }

    let first = request.offset() + 1;
    let last = request.offset() + response.accounts.len();
    let _ = writeln!(
        out,
        "Showing {}-{} of {} (page {}, sorted by {})\n",
        first,
        last,
        response.total_count,
        request.page,
        request.sort_by.label()
    );

    for account in &response.accounts {
        let _ = writeln!(out, "{}", account_card(account));
    }

    out
}

/// Bulleted list of taxonomy values, title-cased
pub fn list(title: &str, items: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    for item in items {
        let _ = writeln!(out, "  - {}", title_case(item));
    }
    out
}

/// Categories with their follower ranges, for names the client recognises
pub fn categories(names: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Influencer Categories:");

    for (idx, name) in names.iter().enumerate() {
        match name.parse::<Category>() {
            Ok(category) => {
                let (min, max) = category.follower_range();
                let range = match max {
                    Some(max) => format!("{} - {}", format_number(min), format_number(max)),
                    None => format!("{}+", format_number(min)),
                };
                let _ = writeln!(out, "\n{}. {} Influencers", idx + 1, category.label());
                let _ = writeln!(out, "   - Followers: {}", range);
                let _ = writeln!(out, "   - {}", category.description());
            }
            Err(_) => {
                let _ = writeln!(out, "\n{}. {}", idx + 1, title_case(name));
            }
        }
    }

    out
}

/// Sort metrics the API accepts, who gets ranked, and how the AI rank is weighted
pub fn parameters() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Available Parameters for Analysis:");
    for (idx, key) in SortKey::ALL.iter().enumerate() {
        let _ = writeln!(out, "{}. {} - {}", idx + 1, key.as_param(), key.description());
    }

    let countries: Vec<String> = COUNTRIES.iter().map(|c| title_case(c)).collect();
    let _ = writeln!(out, "\nFiltering Criteria:");
    let _ = writeln!(out, "- Location: Must be in East Africa ({})", countries.join(", "));
    let _ = writeln!(out, "- Activity: Minimum {} original posts per year", MIN_ANNUAL_POSTS);
    let _ = writeln!(out, "- Content: Only original posts (not retweets/replies)");

    let _ = writeln!(out, "\nAI Ranking Weights:");
    for (name, detail, weight) in RANK_WEIGHTS {
        let _ = writeln!(out, "- {}: {}% ({})", name, weight, detail);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::CategoryFilter;
    use crate::api::EngagementTrend;
    use chrono::Duration;

    fn techboss() -> Account {
        Account {
            username: "techboss".to_string(),
            name: "Tech Boss".to_string(),
            location: "Dar es Salaam".to_string(),
            country: "tanzania".to_string(),
            followers_count: 25_000,
            annual_posts: 450,
            thread_count: 12,
            category: Category::Micro,
            verified: true,
            engagement_score: 4.8,
            intensity_score: 4.46,
            rank: 87.5,
        }
    }

    #[test]
    fn test_leaderboard_rows() {
        let query = LeaderboardQuery {
            category: CategoryFilter::Only(Category::Micro),
            sort_by: SortKey::EngagementScore,
            limit: 10,
        };
        let text = leaderboard(&query, &[techboss()]);

        assert!(text.contains("Leaderboard - Micro (by Engagement Rate)"));
        assert!(text.contains("#1   @techboss ✓  Tech Boss • Tanzania"));
        assert!(text.contains("25.0K"));
        assert!(text.contains("4.8%"));
        assert!(text.contains("450"));
    }

    #[test]
    fn test_empty_leaderboard() {
        let text = leaderboard(&LeaderboardQuery::default(), &[]);
        assert!(text.contains("No influencers ranked yet."));
    }

    #[test]
    fn test_account_card() {
        let text = account_card(&techboss());
        assert!(text.contains("@techboss (Tech Boss)"));
        assert!(text.contains("📍 Dar es Salaam (Tanzania)"));
        assert!(text.contains("Category: Micro Influencer"));
        assert!(text.contains("Followers: 25.0K"));
        assert!(text.contains("✓ Verified account"));
    }

    #[test]
    fn test_search_summary_line() {
        let mut request = SearchRequest::new("tech");
        request.page = 2;
        request.limit = 1;
        let response = SearchResponse {
            accounts: vec![techboss()],
            total_count: 3,
        };

        let text = search(&request, &response);
        assert!(text.contains("Showing 2-2 of 3 (page 2, sorted by AI Rank)"));
    }

    #[test]
    fn test_search_no_results() {
        let text = search(&SearchRequest::new("nothing"), &SearchResponse::default());
        assert!(text.contains("No accounts found"));
    }

    #[test]
    fn test_dashboard_report() {
        let now = Utc::now();
        let stats = DashboardStats {
            total_influencers: 1234,
            average_engagement: 4.8,
            active_countries: 5,
            category_distribution: [("micro".to_string(), 50), ("nano".to_string(), 30)]
                .into_iter()
                .collect(),
            engagement_trends: EngagementTrend {
                labels: vec!["Jan".to_string(), "Feb".to_string()],
                data: vec![65.0, 59.0],
            },
        };
        let activity = vec![RecentActivity {
            title: "New Influencer Added".to_string(),
            username: "techboss".to_string(),
            country: "tanzania".to_string(),
            at: now - Duration::hours(2),
        }];

        let text = dashboard(&stats, &activity, now);
        assert!(text.contains("Total Influencers   1.2K"));
        assert!(text.contains("Average Engagement  4.8%"));
        assert!(text.contains("Micro"));
        assert!(text.contains("62.5%"));
        assert!(text.contains("@techboss (Tanzania)  2 hours ago"));
    }

    #[test]
    fn test_parameters_lists_every_sort_key() {
        let text = parameters();
        for key in SortKey::ALL {
            assert!(text.contains(key.as_param()));
        }
        assert!(text.contains("1. ai_rank - Overall AI-based ranking score"));
        assert!(text.contains("Tanzania, Kenya, Uganda, Rwanda, Burundi"));
        assert!(text.contains("Minimum 365 original posts"));

        let total: u32 = RANK_WEIGHTS.iter().map(|(_, _, w)| w).sum();
        assert_eq!(total, 100);
        assert!(text.contains("- Engagement: 40%"));
        assert!(text.contains("- Follower Base: 20%"));
    }

    #[test]
    fn test_categories_legend() {
        let names = vec!["nano".to_string(), "macro".to_string(), "mega".to_string()];
        let text = categories(&names);
        assert!(text.contains("1. Nano Influencers"));
        assert!(text.contains("Followers: 1.0K - 10.0K"));
        assert!(text.contains("Followers: 100.0K+"));
        assert!(text.contains("3. Mega"));
    }
}
