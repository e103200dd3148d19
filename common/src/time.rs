//! Relative time rendering ("3 minutes ago") for scan times and the refresh
//! indicator.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parses a backend timestamp. Timestamps without an offset are UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Human readable distance from `then` to `now`. Times in the future read as
/// "a few seconds ago".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0) as f64;
    let minutes = secs / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;

    if secs < 45.0 {
        "a few seconds ago".to_string()
    } else if secs < 90.0 {
        "a minute ago".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes ago", minutes.round())
    } else if minutes < 90.0 {
        "an hour ago".to_string()
    } else if hours < 22.0 {
        format!("{} hours ago", hours.round())
    } else if hours < 36.0 {
        "a day ago".to_string()
    } else if days < 26.0 {
        format!("{} days ago", days.round())
    } else if days < 45.0 {
        "a month ago".to_string()
    } else if days < 320.0 {
        format!("{} months ago", (days / 30.0).round())
    } else if days < 548.0 {
        "a year ago".to_string()
    } else {
        format!("{} years ago", (days / 365.0).round())
    }
}

/// `time_ago` for a raw backend timestamp; `None` if it cannot be parsed.
pub fn timestamp_ago(value: &str, now: DateTime<Utc>) -> Option<String> {
    parse_timestamp(value).map(|then| time_ago(then, now))
}

/// Label of the refresh button.
pub fn refreshed_label(last_refreshed: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match last_refreshed {
        Some(at) => format!("Refreshed {}", time_ago(at, now)),
        None => "Refresh".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(d: Duration) -> String {
        let now = parse_timestamp("2024-01-01T12:00:00Z").unwrap();
        time_ago(now - d, now)
    }

    #[test]
    fn thresholds() {
        assert_eq!(ago(Duration::seconds(10)), "a few seconds ago");
        assert_eq!(ago(Duration::seconds(60)), "a minute ago");
        assert_eq!(ago(Duration::minutes(7)), "7 minutes ago");
        assert_eq!(ago(Duration::minutes(50)), "an hour ago");
        assert_eq!(ago(Duration::hours(5)), "5 hours ago");
        assert_eq!(ago(Duration::hours(30)), "a day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(40)), "a month ago");
        assert_eq!(ago(Duration::days(90)), "3 months ago");
        assert_eq!(ago(Duration::days(400)), "a year ago");
        assert_eq!(ago(Duration::days(1100)), "3 years ago");
        assert_eq!(ago(Duration::seconds(-30)), "a few seconds ago");
    }

    #[test]
    fn parses_naive_and_offset_timestamps() {
        let naive = parse_timestamp("2023-11-15T18:18:31.562241").unwrap();
        let offset = parse_timestamp("2023-11-15T19:18:31.562241+01:00").unwrap();
        assert_eq!(naive, offset);
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn refresh_label() {
        let now = parse_timestamp("2024-01-01T12:00:00Z").unwrap();
        assert_eq!(refreshed_label(None, now), "Refresh");
        assert_eq!(
            refreshed_label(Some(now - Duration::minutes(2)), now),
            "Refreshed 2 minutes ago"
        );
    }

    #[test]
    fn refresh_label_moves_with_the_clock_alone() {
        let refreshed = parse_timestamp("2024-01-01T12:00:00Z").unwrap();
        let first_render = refreshed + Duration::seconds(10);
        let after_two_ticks = first_render + Duration::seconds(60);
        assert_eq!(
            refreshed_label(Some(refreshed), first_render),
            "Refreshed a few seconds ago"
        );
        assert_eq!(
            refreshed_label(Some(refreshed), after_two_ticks),
            "Refreshed a minute ago"
        );
    }
}
