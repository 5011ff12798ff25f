// Display formatting helpers shared by the TUI and the text reports

use chrono::{DateTime, Utc};

/// Abbreviate a count for display.
///
/// Below 1,000 the integer is printed as-is. From 1,000 it is shown in
/// thousands with a `K` suffix, from 1,000,000 in millions with `M`, always
/// with one decimal. The decimal is truncated, so 999,999 stays `999.9K`
/// instead of rounding up to `1000.0K`.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        abbreviate(value, 1_000_000, 'M')
    } else if value >= 1_000 {
        abbreviate(value, 1_000, 'K')
    } else {
        value.to_string()
    }
}

fn abbreviate(value: u64, unit: u64, suffix: char) -> String {
    // Integer tenths keep the truncation exact for any u64
    let tenths = value / (unit / 10);
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// Score with two decimals, e.g. `87.50`
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Percentage with one decimal, e.g. `4.8%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Upper-case the first character: `tanzania` -> `Tanzania`
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shorten to at most `max_len` characters, ending in `...` when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Coarse "time ago" label for activity feeds
pub fn format_relative(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    let (amount, unit) = if elapsed.num_days() >= 1 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_number_examples() {
        assert_eq!(format_number(450), "450");
        assert_eq!(format_number(25_000), "25.0K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }

    #[test]
    fn test_format_number_boundaries() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0K");
        assert_eq!(format_number(999_999), "999.9K");
        assert_eq!(format_number(1_000_000), "1.0M");
    }

    #[test]
    fn test_format_number_truncates() {
        assert_eq!(format_number(1_999), "1.9K");
        assert_eq!(format_number(12_345), "12.3K");
        assert_eq!(format_number(1_290_000), "1.2M");
        assert_eq!(format_number(45_000_000_000), "45000.0M");
    }

    #[test]
    fn test_format_score_and_percent() {
        assert_eq!(format_score(4.8), "4.80");
        assert_eq!(format_score(87.456), "87.46");
        assert_eq!(format_percent(4.8), "4.8%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("tanzania"), "Tanzania");
        assert_eq!(title_case("all"), "All");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Dar es Salaam, Tanzania", 12), "Dar es Sa...");
        assert_eq!(truncate("Kigali ✓✓✓✓", 9), "Kigali...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_relative() {
        let now = Utc::now();
        assert_eq!(format_relative(now, now - Duration::seconds(20)), "just now");
        assert_eq!(format_relative(now, now - Duration::minutes(1)), "1 minute ago");
        assert_eq!(format_relative(now, now - Duration::minutes(45)), "45 minutes ago");
        assert_eq!(format_relative(now, now - Duration::hours(2)), "2 hours ago");
        assert_eq!(format_relative(now, now - Duration::days(3)), "3 days ago");
    }
}
