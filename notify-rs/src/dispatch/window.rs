//! Query time windows

use chrono::{DateTime, Duration, Utc};

/// Half-open UTC interval [starts_at, ends_at). Sessions starting exactly
/// at `ends_at` belong to the next run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl TimeWindow {
    /// Reminder window: [now + lead, now + lead + interval). Sized to one
    /// scheduler tick so consecutive runs tile the timeline without gaps or
    /// duplicate sends.
    pub fn reminder(now: DateTime<Utc>, lead_minutes: i64, interval_minutes: i64) -> Self {
        let starts_at = now + Duration::minutes(lead_minutes);
        Self {
            starts_at,
            ends_at: starts_at + Duration::minutes(interval_minutes),
        }
    }

    /// Digest window: the whole next UTC calendar day.
    pub fn next_day(now: DateTime<Utc>) -> Self {
        let tomorrow = now.date_naive() + Duration::days(1);
        let starts_at = tomorrow.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc();
        Self {
            starts_at,
            ends_at: starts_at + Duration::days(1),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.starts_at && instant < self.ends_at
    }
}
