// Filter composition - turns search form state into one API request
//
// The client never matches or ranks accounts itself. It only decides which
// constraints to send; anything left at its "all"/empty default is dropped
// and the backend treats it as unfiltered.

use crate::account::{Category, CategoryFilter, SortKey};
use crate::error::FilterError;
use serde::Serialize;

pub const DEFAULT_LIMIT: u32 = 10;
pub const ALL: &str = "all";

// ============================================================================
// REQUESTS
// ============================================================================

/// Query parameters for `GET /search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub topic: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_followers: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_engagement: Option<f64>,

    pub sort_by: SortKey,
    pub page: u32,
    pub limit: u32,
}

impl SearchRequest {
    /// Unfiltered search for a topic, first page, ranked by AI rank
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            country: None,
            category: None,
            min_followers: None,
            min_engagement: None,
            sort_by: SortKey::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.country.is_none()
            && self.category.is_none()
            && self.min_followers.is_none()
            && self.min_engagement.is_none()
    }

    /// Index of the first result on this page (0-based)
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit as usize
    }
}

/// Parameters for `GET /leaderboard/{category}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub category: CategoryFilter,
    pub sort_by: SortKey,
    pub limit: u32,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            sort_by: SortKey::AiRank,
            limit: DEFAULT_LIMIT,
        }
    }
}

// ============================================================================
// FORM STATE
// ============================================================================

/// Search form exactly as the user filled it in.
///
/// Numeric thresholds stay as text until submission so half-typed input
/// ("2.", "") never has to be representable as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    pub query: String,
    pub country: String,
    pub category: String,
    pub min_followers: String,
    pub min_engagement: String,
    pub sort_by: SortKey,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            query: String::new(),
            country: ALL.to_string(),
            category: ALL.to_string(),
            min_followers: String::new(),
            min_engagement: String::new(),
            sort_by: SortKey::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchForm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Put every filter back to its default, keeping the query text
    pub fn reset_filters(&mut self) {
        *self = Self::new(std::mem::take(&mut self.query));
    }

    /// Build the request the backend should receive for this form
    pub fn to_request(&self) -> Result<SearchRequest, FilterError> {
        let topic = self.query.trim();
        if topic.is_empty() {
            return Err(FilterError::EmptyQuery);
        }

        let category = match self.category.parse::<CategoryFilter>()? {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        };

        let min_followers = parse_threshold::<u64>("minimum followers", &self.min_followers)?;
        let min_engagement = parse_threshold::<f64>("minimum engagement", &self.min_engagement)?;

        Ok(SearchRequest {
            topic: topic.to_string(),
            country: optional_choice(&self.country),
            category,
            min_followers,
            min_engagement,
            sort_by: self.sort_by,
            page: self.page.max(1),
            limit: self.limit,
        })
    }
}

/// `None` for an empty or "all" selection
fn optional_choice(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value.to_string())
    }
}

trait Threshold: Sized {
    fn parse_text(text: &str) -> Option<Self>;
    fn is_negative(&self) -> bool;
}

impl Threshold for u64 {
    fn parse_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn is_negative(&self) -> bool {
        false
    }
}

impl Threshold for f64 {
    fn parse_text(text: &str) -> Option<Self> {
        text.parse::<f64>().ok().filter(|value| value.is_finite())
    }

    fn is_negative(&self) -> bool {
        *self < 0.0
    }
}

fn parse_threshold<T: Threshold>(field: &'static str, text: &str) -> Result<Option<T>, FilterError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if text.starts_with('-') {
        return Err(FilterError::Negative { field });
    }

    let value = T::parse_text(text).ok_or_else(|| FilterError::InvalidNumber {
        field,
        value: text.to_string(),
    })?;

    if value.is_negative() {
        return Err(FilterError::Negative { field });
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_unfiltered_query() {
        let request = SearchForm::new("tech startups").to_request().unwrap();

        assert_eq!(request, SearchRequest::new("tech startups"));
        assert!(request.is_unfiltered());
    }

    #[test]
    fn test_default_form_serializes_only_topic_and_paging() {
        let request = SearchForm::new("music").to_request().unwrap();
        let value = serde_json::to_value(&request).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert!(keys.contains(&"topic"));
        assert!(!keys.contains(&"country"));
        assert!(!keys.contains(&"category"));
        assert!(!keys.contains(&"min_followers"));
        assert!(!keys.contains(&"min_engagement"));
        assert_eq!(value["sort_by"], "ai_rank");
    }

    #[test]
    fn test_all_filters_are_forwarded() {
        let form = SearchForm {
            query: "  digital artists ".to_string(),
            country: "Kenya".to_string(),
            category: "Micro".to_string(),
            min_followers: "1000".to_string(),
            min_engagement: " 2.5 ".to_string(),
            sort_by: SortKey::EngagementScore,
            page: 2,
            limit: 25,
        };

        let request = form.to_request().unwrap();
        assert_eq!(request.topic, "digital artists");
        assert_eq!(request.country.as_deref(), Some("Kenya"));
        assert_eq!(request.category, Some(Category::Micro));
        assert_eq!(request.min_followers, Some(1000));
        assert_eq!(request.min_engagement, Some(2.5));
        assert_eq!(request.sort_by, SortKey::EngagementScore);
        assert_eq!(request.offset(), 25);
    }

    #[test]
    fn test_all_selection_is_case_insensitive() {
        let mut form = SearchForm::new("tech");
        form.country = "ALL".to_string();
        form.category = "All".to_string();

        assert!(form.to_request().unwrap().is_unfiltered());
    }

    #[test]
    fn test_empty_query_rejected() {
        assert_eq!(SearchForm::new("   ").to_request(), Err(FilterError::EmptyQuery));
    }

    #[test]
    fn test_bad_numbers_rejected() {
        let mut form = SearchForm::new("tech");
        form.min_followers = "lots".to_string();
        assert!(matches!(
            form.to_request(),
            Err(FilterError::InvalidNumber { field: "minimum followers", .. })
        ));

        form.min_followers = "-5".to_string();
        assert_eq!(
            form.to_request(),
            Err(FilterError::Negative { field: "minimum followers" })
        );

        form.min_followers.clear();
        form.min_engagement = "NaN".to_string();
        assert!(matches!(form.to_request(), Err(FilterError::InvalidNumber { .. })));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut form = SearchForm::new("tech");
        form.category = "giga".to_string();
        assert!(matches!(form.to_request(), Err(FilterError::UnknownOption(_))));
    }

    #[test]
    fn test_page_zero_clamped() {
        let mut form = SearchForm::new("tech");
        form.page = 0;
        assert_eq!(form.to_request().unwrap().page, 1);
    }

    #[test]
    fn test_reset_filters_keeps_query() {
        let mut form = SearchForm::new("fashion");
        form.country = "uganda".to_string();
        form.min_engagement = "3".to_string();
        form.page = 4;

        form.reset_filters();
        assert_eq!(form, SearchForm::new("fashion"));
    }
}
