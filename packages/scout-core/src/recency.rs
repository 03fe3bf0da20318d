//! Recency classification for posting timestamps
//!
//! Pure functions: "now" is always an explicit parameter so bucket
//! boundaries stay deterministic under test.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// How recently a posting went up: a human-relative label plus whether the
/// posting counts as new (less than 24 hours old).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recency {
    pub label: String,
    pub is_new: bool,
}

/// Parse a posting timestamp, tolerating the formats agents actually emit.
///
/// Tries RFC 3339, RFC 2822, then common naive datetime and bare-date
/// renderings (naive values are taken as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

/// Whether a posting is new: posted less than 24 hours before `now`.
/// Unparseable timestamps are never new.
pub fn is_new(posted_date: &str, now: DateTime<Utc>) -> bool {
    match parse_timestamp(posted_date) {
        Some(posted) => (now - posted).num_hours() < 24,
        None => false,
    }
}

/// Classify a posting timestamp into a relative-age label.
///
/// An unparseable timestamp falls back to the raw input unchanged and is
/// not new; no failure escapes to the caller.
pub fn classify(posted_date: &str, now: DateTime<Utc>) -> Recency {
    let Some(posted) = parse_timestamp(posted_date) else {
        return Recency {
            label: posted_date.to_string(),
            is_new: false,
        };
    };

    let age = now - posted;
    let hours = age.num_hours();
    let days = age.num_days();

    let label = if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} week{} ago", weeks, plural(weeks))
    } else {
        posted.format("%-m/%-d/%Y").to_string()
    };

    Recency {
        label,
        is_new: hours < 24,
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(now: DateTime<Utc>, age: Duration) -> String {
        (now - age).to_rfc3339()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now_under_one_hour() {
        let now = fixed_now();
        let recency = classify(&at(now, Duration::minutes(30)), now);
        assert_eq!(recency.label, "Just now");
        assert!(recency.is_new);
    }

    #[test]
    fn test_hours_with_singular_plural() {
        let now = fixed_now();
        assert_eq!(classify(&at(now, Duration::hours(1)), now).label, "1 hour ago");
        assert_eq!(classify(&at(now, Duration::hours(5)), now).label, "5 hours ago");
    }

    #[test]
    fn test_yesterday_at_exactly_one_day() {
        let now = fixed_now();
        let recency = classify(&at(now, Duration::hours(30)), now);
        assert_eq!(recency.label, "Yesterday");
        assert!(!recency.is_new);
    }

    #[test]
    fn test_days_bucket() {
        let now = fixed_now();
        assert_eq!(classify(&at(now, Duration::days(3)), now).label, "3 days ago");
        assert_eq!(classify(&at(now, Duration::days(6)), now).label, "6 days ago");
    }

    #[test]
    fn test_weeks_with_singular_plural() {
        let now = fixed_now();
        assert_eq!(classify(&at(now, Duration::days(8)), now).label, "1 week ago");
        assert_eq!(classify(&at(now, Duration::days(21)), now).label, "3 weeks ago");
    }

    #[test]
    fn test_old_postings_get_absolute_date() {
        let now = fixed_now();
        let recency = classify(&at(now, Duration::days(45)), now);
        assert_eq!(recency.label, "7/9/2026");
        assert!(!recency.is_new);
    }

    #[test]
    fn test_unparseable_falls_back_to_raw_input() {
        let now = fixed_now();
        let recency = classify("sometime last spring", now);
        assert_eq!(recency.label, "sometime last spring");
        assert!(!recency.is_new);
    }

    #[test]
    fn test_is_new_boundary() {
        let now = fixed_now();
        assert!(is_new(&at(now, Duration::hours(23)), now));
        assert!(!is_new(&at(now, Duration::hours(24)), now));
        assert!(!is_new("not a date", now));
    }

    #[test]
    fn test_tolerant_parsing_formats() {
        assert!(parse_timestamp("2026-08-20T10:00:00Z").is_some());
        assert!(parse_timestamp("Thu, 20 Aug 2026 10:00:00 +0000").is_some());
        assert!(parse_timestamp("2026-08-20 10:00:00").is_some());
        assert!(parse_timestamp("2026-08-20").is_some());
        assert!(parse_timestamp("08/20/2026").is_some());
        assert!(parse_timestamp("").is_none());
    }
}
