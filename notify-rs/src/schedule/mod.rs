//! Schedule data access
//!
//! Read layer over the event platform's relational backend. The dispatcher
//! consumes it through the [`ScheduleSource`] trait so tests can substitute
//! fakes for the query layer.

pub mod store;
pub mod types;

use crate::dispatch::{NotificationKind, TimeWindow};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use store::ScheduleStore;
pub use types::{NotificationSettings, ScheduleRow, SponsorRow, SponsorTier, SponsorTiers};

/// Queries the notification dispatcher needs.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Settings rows with the given notification kind enabled, optionally
    /// scoped to a single event.
    async fn enabled_settings(
        &self,
        kind: NotificationKind,
        event_id: Option<&str>,
    ) -> Result<Vec<NotificationSettings>>;

    /// Settings for one event regardless of enablement (test sends).
    async fn settings_for_event(&self, event_id: &str) -> Result<Option<NotificationSettings>>;

    /// Schedule rows for one event whose session start falls inside the
    /// half-open window, joined to attendee and booth info.
    async fn schedule_rows_in_window(
        &self,
        event_id: &str,
        window: &TimeWindow,
        registered_only: bool,
    ) -> Result<Vec<ScheduleRow>>;

    /// Sponsor-flagged booth rows for one event.
    async fn sponsor_rows(&self, event_id: &str) -> Result<Vec<SponsorRow>>;

    /// The attendee's next registered session at or after `after`.
    async fn next_session_for_attendee(
        &self,
        event_id: &str,
        email: &str,
        after: DateTime<Utc>,
    ) -> Result<Option<ScheduleRow>>;
}
