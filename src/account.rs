// Account Entity - influencer profile as served by the X-EA Awards API
//
// The backend owns these records: it validates usernames, assigns the tier
// and computes every score. The client only reads and displays them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CATEGORY TIER
// ============================================================================

/// Follower-count bucket an account falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 1K - 10K followers
    Nano,
    /// 10K - 100K followers
    Micro,
    /// 100K+ followers
    Macro,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Nano, Category::Micro, Category::Macro];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nano => "nano",
            Category::Micro => "micro",
            Category::Macro => "macro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Nano => "Nano",
            Category::Micro => "Micro",
            Category::Macro => "Macro",
        }
    }

    /// Follower range `[min, max)` of the tier; `None` means unbounded
    pub fn follower_range(&self) -> (u64, Option<u64>) {
        match self {
            Category::Nano => (1_000, Some(10_000)),
            Category::Micro => (10_000, Some(100_000)),
            Category::Macro => (100_000, None),
        }
    }

    /// Tier for a follower count. Accounts under 1K are still reported as nano.
    pub fn from_followers(followers: u64) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| {
                let (min, max) = category.follower_range();
                followers >= min && max.map_or(true, |max| followers < max)
            })
            .unwrap_or(Category::Nano)
    }

    /// One-line blurb shown in category legends
    pub fn description(&self) -> &'static str {
        match self {
            Category::Nano => "Highly engaged with their community, often niche-focused",
            Category::Micro => "Strong engagement rates, growing authority in their field",
            Category::Macro => "Wide reach and impact, established authority",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known tier or sort key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nano" => Ok(Category::Nano),
            "micro" => Ok(Category::Micro),
            "macro" => Ok(Category::Macro),
            _ => Err(ParseEnumError {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Category selection used by filters and leaderboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tab order on the leaderboard
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Nano),
        CategoryFilter::Only(Category::Micro),
        CategoryFilter::Only(Category::Macro),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            trimmed.parse().map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SORT KEY
// ============================================================================

/// Backend column an account listing can be ordered by (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    AiRank,
    EngagementScore,
    IntensityScore,
    FollowersCount,
    AnnualPosts,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::AiRank,
        SortKey::EngagementScore,
        SortKey::IntensityScore,
        SortKey::FollowersCount,
        SortKey::AnnualPosts,
    ];

    /// Wire name used in `sort_by` query parameters
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::AiRank => "ai_rank",
            SortKey::EngagementScore => "engagement_score",
            SortKey::IntensityScore => "intensity_score",
            SortKey::FollowersCount => "followers_count",
            SortKey::AnnualPosts => "annual_posts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::AiRank => "AI Rank",
            SortKey::EngagementScore => "Engagement Rate",
            SortKey::IntensityScore => "Intensity",
            SortKey::FollowersCount => "Followers",
            SortKey::AnnualPosts => "Post Count",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortKey::AiRank => "Overall AI-based ranking score",
            SortKey::EngagementScore => "Weighted engagement metrics",
            SortKey::IntensityScore => "Posting frequency and thread creation",
            SortKey::FollowersCount => "Number of followers",
            SortKey::AnnualPosts => "Original posts in the past year",
        }
    }

    /// Value of this column for an account, widened to f64 for comparison
    pub fn value_of(&self, account: &Account) -> f64 {
        match self {
            SortKey::AiRank => account.rank,
            SortKey::EngagementScore => account.engagement_score,
            SortKey::IntensityScore => account.intensity_score,
            SortKey::FollowersCount => account.followers_count as f64,
            SortKey::AnnualPosts => account.annual_posts as f64,
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        // Short names as used by the leaderboard's sort menu
        let wanted = match wanted.as_str() {
            "rank" => "ai_rank",
            "engagement" => "engagement_score",
            "intensity" => "intensity_score",
            "followers" => "followers_count",
            "posts" => "annual_posts",
            other => other,
        };
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_param() == wanted)
            .ok_or_else(|| ParseEnumError {
                kind: "sort key",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

/// Influencer profile returned by `/search` and `/leaderboard/{category}`.
///
/// The leaderboard endpoint returns raw records with extra columns
/// (`following_count`, `description`, ...); those are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub country: String,

    pub followers_count: u64,

    /// Original posts over the past year
    pub annual_posts: u64,

    /// Self-reply threads among recent posts
    pub thread_count: u64,

    pub category: Category,

    #[serde(default)]
    pub verified: bool,

    pub engagement_score: f64,

    pub intensity_score: f64,

    #[serde(rename = "ai_rank")]
    pub rank: f64,
}

impl Account {
    /// `@username` handle
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}
