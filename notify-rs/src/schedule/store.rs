//! Schedule store - read access to the event platform database

use crate::dispatch::{NotificationKind, TimeWindow};
use crate::error::{NotifyError, Result};
use crate::schedule::types::{NotificationSettings, ScheduleRow, SponsorRow, SponsorTier};
use crate::schedule::ScheduleSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Read layer over the platform's relational data: notification settings,
/// schedule rows, sponsor booths.
pub struct ScheduleStore {
    db: SqlitePool,
}

impl ScheduleStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Initialize database tables
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS events (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS notification_settings (
                event_id TEXT PRIMARY KEY,
                reminders_enabled BOOLEAN NOT NULL DEFAULT 0,
                digest_enabled BOOLEAN NOT NULL DEFAULT 0,
                lead_minutes INTEGER NOT NULL DEFAULT 30,
                sender_name TEXT NOT NULL,
                sender_email TEXT NOT NULL,
                reminder_template_html TEXT,
                digest_template_html TEXT,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (event_id) REFERENCES events(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS attendees (
                id TEXT PRIMARY KEY,
                event_id TEXT NOT NULL,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                FOREIGN KEY (event_id) REFERENCES events(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id TEXT PRIMARY KEY,
                event_id TEXT NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                location TEXT NOT NULL DEFAULT '',
                speaker TEXT NOT NULL DEFAULT '',
                starts_at TEXT NOT NULL,
                ends_at TEXT NOT NULL,
                FOREIGN KEY (event_id) REFERENCES events(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS booths (
                id TEXT PRIMARY KEY,
                event_id TEXT NOT NULL,
                name TEXT NOT NULL,
                capacity INTEGER NOT NULL DEFAULT 0,
                is_sponsor BOOLEAN NOT NULL DEFAULT 0,
                sponsor_tier TEXT,
                logo_url TEXT,
                website_url TEXT,
                FOREIGN KEY (event_id) REFERENCES events(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS registrations (
                id TEXT PRIMARY KEY,
                event_id TEXT NOT NULL,
                session_id TEXT NOT NULL,
                attendee_id TEXT NOT NULL,
                booth_id TEXT,
                status TEXT NOT NULL DEFAULT 'registered',
                FOREIGN KEY (session_id) REFERENCES sessions(id) ON DELETE CASCADE,
                FOREIGN KEY (attendee_id) REFERENCES attendees(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        // Index for the window queries
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_sessions_event_start
            ON sessions(event_id, starts_at)
            "#,
        )
        .execute(&self.db)
        .await?;

        Ok(())
    }

    fn row_to_settings(&self, row: SqliteRow) -> Result<NotificationSettings> {
        Ok(NotificationSettings {
            event_id: row.try_get("event_id")?,
            event_name: row.try_get("event_name")?,
            reminders_enabled: row.try_get("reminders_enabled")?,
            digest_enabled: row.try_get("digest_enabled")?,
            lead_minutes: row.try_get("lead_minutes")?,
            sender_name: row.try_get("sender_name")?,
            sender_email: row.try_get("sender_email")?,
            reminder_template_html: row.try_get("reminder_template_html")?,
            digest_template_html: row.try_get("digest_template_html")?,
        })
    }

    fn row_to_schedule(&self, row: SqliteRow) -> Result<ScheduleRow> {
        let starts_at: String = row.try_get("starts_at")?;
        let ends_at: String = row.try_get("ends_at")?;

        Ok(ScheduleRow {
            event_id: row.try_get("event_id")?,
            attendee_id: row.try_get("attendee_id")?,
            attendee_name: row.try_get("attendee_name")?,
            attendee_email: row.try_get("attendee_email")?,
            session_id: row.try_get("session_id")?,
            session_name: row.try_get("session_name")?,
            description: row.try_get("description")?,
            location: row.try_get("location")?,
            speaker: row.try_get("speaker")?,
            starts_at: parse_datetime(&starts_at)?,
            ends_at: parse_datetime(&ends_at)?,
            booth_name: row.try_get("booth_name")?,
        })
    }
}

#[async_trait]
impl ScheduleSource for ScheduleStore {
    async fn enabled_settings(
        &self,
        kind: NotificationKind,
        event_id: Option<&str>,
    ) -> Result<Vec<NotificationSettings>> {
        let flag_column = match kind {
            NotificationKind::SessionReminder => "reminders_enabled",
            NotificationKind::DailyDigest => "digest_enabled",
        };

        let sql = format!(
            r#"
            SELECT ns.event_id, e.name AS event_name, ns.reminders_enabled,
                   ns.digest_enabled, ns.lead_minutes, ns.sender_name,
                   ns.sender_email, ns.reminder_template_html, ns.digest_template_html
            FROM notification_settings ns
            JOIN events e ON e.id = ns.event_id
            WHERE ns.{} = 1 {}
            ORDER BY ns.event_id
            "#,
            flag_column,
            if event_id.is_some() {
                "AND ns.event_id = ?"
            } else {
                ""
            },
        );

        let mut query = sqlx::query(&sql);
        if let Some(event_id) = event_id {
            query = query.bind(event_id);
        }

        let rows = query.fetch_all(&self.db).await?;
        rows.into_iter().map(|r| self.row_to_settings(r)).collect()
    }

    async fn settings_for_event(&self, event_id: &str) -> Result<Option<NotificationSettings>> {
        let row = sqlx::query(
            r#"
            SELECT ns.event_id, e.name AS event_name, ns.reminders_enabled,
                   ns.digest_enabled, ns.lead_minutes, ns.sender_name,
                   ns.sender_email, ns.reminder_template_html, ns.digest_template_html
            FROM notification_settings ns
            JOIN events e ON e.id = ns.event_id
            WHERE ns.event_id = ?
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => Ok(Some(self.row_to_settings(row)?)),
            None => Ok(None),
        }
    }

    async fn schedule_rows_in_window(
        &self,
        event_id: &str,
        window: &TimeWindow,
        registered_only: bool,
    ) -> Result<Vec<ScheduleRow>> {
        // The window is half-open [starts_at, ends_at): a session exactly at
        // the boundary belongs to the later run only.
        let sql = format!(
            r#"
            SELECT s.event_id, a.id AS attendee_id, a.name AS attendee_name,
                   a.email AS attendee_email, s.id AS session_id,
                   s.name AS session_name, s.description, s.location, s.speaker,
                   s.starts_at, s.ends_at, b.name AS booth_name
            FROM registrations r
            JOIN sessions s ON s.id = r.session_id
            JOIN attendees a ON a.id = r.attendee_id
            LEFT JOIN booths b ON b.id = r.booth_id
            WHERE s.event_id = ? AND s.starts_at >= ? AND s.starts_at < ? {}
            ORDER BY a.email, s.starts_at
            "#,
            if registered_only {
                "AND r.status = 'registered'"
            } else {
                ""
            },
        );

        let rows = sqlx::query(&sql)
            .bind(event_id)
            .bind(window.starts_at.to_rfc3339())
            .bind(window.ends_at.to_rfc3339())
            .fetch_all(&self.db)
            .await?;

        rows.into_iter().map(|r| self.row_to_schedule(r)).collect()
    }

    async fn sponsor_rows(&self, event_id: &str) -> Result<Vec<SponsorRow>> {
        let rows = sqlx::query(
            r#"
            SELECT name, sponsor_tier, logo_url, website_url
            FROM booths
            WHERE event_id = ? AND is_sponsor = 1 AND sponsor_tier IS NOT NULL
            ORDER BY name
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.db)
        .await?;

        let mut sponsors = Vec::new();
        for row in rows {
            let tier_str: String = row.try_get("sponsor_tier")?;
            // Rows with an unknown tier label are skipped rather than
            // failing the run.
            let Some(tier) = SponsorTier::from_db_string(&tier_str) else {
                continue;
            };
            sponsors.push(SponsorRow {
                name: row.try_get("name")?,
                tier,
                logo_url: row.try_get::<Option<String>, _>("logo_url")?.unwrap_or_default(),
                website_url: row
                    .try_get::<Option<String>, _>("website_url")?
                    .unwrap_or_default(),
            });
        }
        Ok(sponsors)
    }

    async fn next_session_for_attendee(
        &self,
        event_id: &str,
        email: &str,
        after: DateTime<Utc>,
    ) -> Result<Option<ScheduleRow>> {
        let row = sqlx::query(
            r#"
            SELECT s.event_id, a.id AS attendee_id, a.name AS attendee_name,
                   a.email AS attendee_email, s.id AS session_id,
                   s.name AS session_name, s.description, s.location, s.speaker,
                   s.starts_at, s.ends_at, b.name AS booth_name
            FROM registrations r
            JOIN sessions s ON s.id = r.session_id
            JOIN attendees a ON a.id = r.attendee_id
            LEFT JOIN booths b ON b.id = r.booth_id
            WHERE s.event_id = ? AND a.email = ? AND r.status = 'registered'
                  AND s.starts_at >= ?
            ORDER BY s.starts_at
            LIMIT 1
            "#,
        )
        .bind(event_id)
        .bind(email)
        .bind(after.to_rfc3339())
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => Ok(Some(self.row_to_schedule(row)?)),
            None => Ok(None),
        }
    }
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| NotifyError::Parse(format!("invalid timestamp '{}': {}", s, e)))
}
