//! Calendar-link and duration helpers

use chrono::{DateTime, Utc};

/// Compact UTC timestamp format used by calendar URLs (YYYYMMDDTHHMMSSZ)
const CALENDAR_TIMESTAMP: &str = "%Y%m%dT%H%M%SZ";

/// Build a Google Calendar "add event" URL.
pub fn google_calendar_link(
    name: &str,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    location: &str,
    description: &str,
) -> String {
    format!(
        "https://calendar.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&location={}&details={}",
        urlencoding::encode(name),
        starts_at.format(CALENDAR_TIMESTAMP),
        ends_at.format(CALENDAR_TIMESTAMP),
        urlencoding::encode(location),
        urlencoding::encode(description),
    )
}

/// Human-readable duration between two instants ("1h 30min", "2h", "45min").
/// An end before the start clamps to "0min".
pub fn format_duration(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> String {
    let minutes = (ends_at - starts_at).num_minutes().max(0);
    let hours = minutes / 60;
    let minutes = minutes % 60;

    if hours > 0 && minutes > 0 {
        format!("{}h {}min", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}min", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_calendar_link_dates_parameter() {
        let link = google_calendar_link(
            "Keynote",
            ts("2025-06-01T14:00:00Z"),
            ts("2025-06-01T15:00:00Z"),
            "Hall A",
            "desc",
        );

        assert!(link.contains("dates=20250601T140000Z/20250601T150000Z"));
        assert!(link.contains("text=Keynote"));
        assert!(link.contains("location=Hall%20A"));
    }

    #[test]
    fn test_calendar_link_encodes_query_values() {
        let link = google_calendar_link(
            "Q&A: Scaling",
            ts("2025-06-01T14:00:00Z"),
            ts("2025-06-01T15:00:00Z"),
            "Room 2 & 3",
            "bring questions",
        );

        assert!(link.contains("text=Q%26A%3A%20Scaling"));
        assert!(link.contains("location=Room%202%20%26%203"));
    }

    #[test]
    fn test_duration_hours_and_minutes() {
        assert_eq!(
            format_duration(ts("2025-06-01T14:00:00Z"), ts("2025-06-01T15:30:00Z")),
            "1h 30min"
        );
    }

    #[test]
    fn test_duration_whole_hours() {
        assert_eq!(
            format_duration(ts("2025-06-01T14:00:00Z"), ts("2025-06-01T16:00:00Z")),
            "2h"
        );
    }

    #[test]
    fn test_duration_minutes_only() {
        assert_eq!(
            format_duration(ts("2025-06-01T14:00:00Z"), ts("2025-06-01T14:45:00Z")),
            "45min"
        );
    }

    #[test]
    fn test_duration_negative_clamps_to_zero() {
        assert_eq!(
            format_duration(ts("2025-06-01T15:00:00Z"), ts("2025-06-01T14:00:00Z")),
            "0min"
        );
    }
}
