//! Notification dispatch
//!
//! One dispatch run covers one notification kind and one time window:
//! discover enabled events, query their schedule rows, group per recipient,
//! render and send one email per recipient, and fold the outcomes into a
//! summary. A failed send is recorded and never aborts the run.

pub mod context;
pub mod types;
pub mod window;

pub use context::{build_bag, group_by_recipient, RecipientGroup};
pub use types::{DispatchSummary, NotificationKind, TriggerRequest};
pub use window::TimeWindow;

use crate::config::NotificationsConfig;
use crate::error::{NotifyError, Result};
use crate::schedule::types::{NotificationSettings, ScheduleRow, SponsorTiers};
use crate::schedule::ScheduleSource;
use crate::template;
use crate::template::defaults::{DAILY_DIGEST_TEMPLATE, SESSION_REMINDER_TEMPLATE};
use crate::transport::{EmailTransport, OutboundEmail};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Orchestrates notification runs over a schedule source and an email
/// transport. Configuration is injected at construction; the dispatcher
/// reads no ambient state.
pub struct Dispatcher<S, T> {
    source: S,
    transport: T,
    config: NotificationsConfig,
}

impl<S: ScheduleSource, T: EmailTransport> Dispatcher<S, T> {
    pub fn new(source: S, transport: T, config: NotificationsConfig) -> Self {
        Self {
            source,
            transport,
            config,
        }
    }

    /// Run one dispatch for the given kind.
    pub async fn run(
        &self,
        kind: NotificationKind,
        trigger: &TriggerRequest,
    ) -> Result<DispatchSummary> {
        if trigger.is_test {
            return self.run_test(kind, trigger).await;
        }

        let settings = self
            .source
            .enabled_settings(kind, trigger.event_id.as_deref())
            .await?;

        if settings.is_empty() {
            info!("No events with {} notifications enabled", kind.as_str());
            return Ok(DispatchSummary::empty(format!(
                "no events with {} notifications enabled",
                kind.as_str()
            )));
        }

        let now = Utc::now();
        let mut summary = DispatchSummary::default();

        for event in &settings {
            let window = match kind {
                NotificationKind::SessionReminder => TimeWindow::reminder(
                    now,
                    event.lead_minutes,
                    self.config.run_interval_minutes,
                ),
                NotificationKind::DailyDigest => TimeWindow::next_day(now),
            };

            let rows = self
                .source
                .schedule_rows_in_window(
                    &event.event_id,
                    &window,
                    kind == NotificationKind::SessionReminder,
                )
                .await?;

            if rows.is_empty() {
                debug!(
                    "No upcoming sessions for event {} in [{}, {})",
                    event.event_id, window.starts_at, window.ends_at
                );
                continue;
            }

            let sponsors = SponsorTiers::partition(self.source.sponsor_rows(&event.event_id).await?);

            for group in group_by_recipient(rows) {
                let outcome = self
                    .deliver(kind, event, &sponsors, &group)
                    .await
                    .map_err(|e| {
                        warn!("Send to {} failed: {}", group.attendee_email, e);
                        format!("{}: {}", group.attendee_email, e)
                    });
                summary.record(outcome);
            }
        }

        info!(
            "Dispatch run {} complete: {}/{} sent, {} errors",
            kind.as_str(),
            summary.sent,
            summary.total,
            summary.errors.len()
        );
        Ok(summary)
    }

    /// Render and send one email for one recipient group.
    async fn deliver(
        &self,
        kind: NotificationKind,
        settings: &NotificationSettings,
        sponsors: &SponsorTiers,
        group: &RecipientGroup,
    ) -> Result<()> {
        let bag = build_bag(kind, group, settings, sponsors, &self.config.portal_url);
        let html = template::render(template_for(kind, settings), &bag);
        let subject = match kind {
            NotificationKind::SessionReminder => {
                format!("Your sessions at {} start soon", settings.event_name)
            }
            NotificationKind::DailyDigest => {
                format!("Your daily agenda for {}", settings.event_name)
            }
        };

        self.transport
            .send(&OutboundEmail {
                from: settings.sender(),
                to: group.attendee_email.clone(),
                subject,
                html,
            })
            .await
    }

    /// Manual-verification path: one email to the given address, using the
    /// attendee's nearest real upcoming session when one exists and a
    /// synthetic one otherwise. Grouping and window logic are skipped.
    async fn run_test(
        &self,
        kind: NotificationKind,
        trigger: &TriggerRequest,
    ) -> Result<DispatchSummary> {
        let test_email = trigger
            .test_email
            .as_deref()
            .ok_or_else(|| NotifyError::Config("testEmail is required for test sends".to_string()))?;
        let event_id = trigger
            .event_id
            .as_deref()
            .ok_or_else(|| NotifyError::Config("eventId is required for test sends".to_string()))?;

        let settings = self
            .source
            .settings_for_event(event_id)
            .await?
            .ok_or_else(|| {
                NotifyError::NotFound(format!("no notification settings for event {}", event_id))
            })?;

        let now = Utc::now();
        let row = match self
            .source
            .next_session_for_attendee(event_id, test_email, now)
            .await?
        {
            Some(row) => row,
            None => self.synthetic_row(event_id, test_email, now),
        };

        let group = RecipientGroup {
            attendee_name: row.attendee_name.clone(),
            attendee_email: test_email.to_string(),
            rows: vec![row],
        };
        let sponsors = SponsorTiers::partition(self.source.sponsor_rows(event_id).await?);

        info!("Sending {} test email to {}", kind.as_str(), test_email);

        let mut summary = DispatchSummary::default();
        let outcome = self
            .deliver(kind, &settings, &sponsors, &group)
            .await
            .map_err(|e| format!("{}: {}", test_email, e));
        summary.record(outcome);
        Ok(summary)
    }

    fn synthetic_row(&self, event_id: &str, email: &str, now: DateTime<Utc>) -> ScheduleRow {
        let starts_at = now + Duration::minutes(self.config.default_lead_minutes);
        ScheduleRow {
            event_id: event_id.to_string(),
            attendee_id: Uuid::new_v4().to_string(),
            attendee_name: "Test Attendee".to_string(),
            attendee_email: email.to_string(),
            session_id: Uuid::new_v4().to_string(),
            session_name: "Sample Session".to_string(),
            description: "A sample session used to verify notification delivery.".to_string(),
            location: "Main Hall".to_string(),
            speaker: String::new(),
            starts_at,
            ends_at: starts_at + Duration::minutes(45),
            booth_name: None,
        }
    }
}

fn template_for(kind: NotificationKind, settings: &NotificationSettings) -> &str {
    match kind {
        NotificationKind::SessionReminder => settings
            .reminder_template_html
            .as_deref()
            .unwrap_or(SESSION_REMINDER_TEMPLATE),
        NotificationKind::DailyDigest => settings
            .digest_template_html
            .as_deref()
            .unwrap_or(DAILY_DIGEST_TEMPLATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_override(reminder: Option<&str>) -> NotificationSettings {
        NotificationSettings {
            event_id: "ev".to_string(),
            event_name: "Test Expo".to_string(),
            reminders_enabled: true,
            digest_enabled: true,
            lead_minutes: 30,
            sender_name: "Events Team".to_string(),
            sender_email: "events@test.example".to_string(),
            reminder_template_html: reminder.map(str::to_string),
            digest_template_html: None,
        }
    }

    #[test]
    fn test_template_override_wins() {
        let settings = settings_with_override(Some("<p>{{ATTENDEE_NAME}}</p>"));
        assert_eq!(
            template_for(NotificationKind::SessionReminder, &settings),
            "<p>{{ATTENDEE_NAME}}</p>"
        );
    }

    #[test]
    fn test_builtin_template_is_the_fallback() {
        let settings = settings_with_override(None);
        assert_eq!(
            template_for(NotificationKind::SessionReminder, &settings),
            SESSION_REMINDER_TEMPLATE
        );
        assert_eq!(
            template_for(NotificationKind::DailyDigest, &settings),
            DAILY_DIGEST_TEMPLATE
        );
    }
}
