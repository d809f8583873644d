//! Session and booth analytics
//!
//! Single-pass aggregates over the registration data, recomputed on every
//! request and never cached.

use crate::error::Result;
use crate::schedule::store::parse_datetime;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Row, SqlitePool};

/// Attendance counts for one session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub session_id: String,
    pub session_name: String,
    pub starts_at: DateTime<Utc>,
    /// Registrations that were not cancelled
    pub registered: i64,
    /// Registrations already checked in
    pub attended: i64,
}

/// Expected headcount against capacity for one booth.
#[derive(Debug, Clone, Serialize)]
pub struct BoothStats {
    pub booth_id: String,
    pub booth_name: String,
    pub capacity: i64,
    pub expected: i64,
    /// Expected headcount as a percentage of capacity; zero-capacity booths
    /// report zero
    pub utilization_pct: i64,
}

/// Analytics summary for one event.
#[derive(Debug, Clone, Serialize)]
pub struct EventAnalytics {
    pub event_id: String,
    pub sessions: Vec<SessionStats>,
    pub booths: Vec<BoothStats>,
}

/// Computes analytics summaries straight from the database.
pub struct AnalyticsService {
    db: SqlitePool,
}

impl AnalyticsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn event_analytics(&self, event_id: &str) -> Result<EventAnalytics> {
        Ok(EventAnalytics {
            event_id: event_id.to_string(),
            sessions: self.session_stats(event_id).await?,
            booths: self.booth_stats(event_id).await?,
        })
    }

    async fn session_stats(&self, event_id: &str) -> Result<Vec<SessionStats>> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.name, s.starts_at,
                   COUNT(r.id) AS registered,
                   COALESCE(SUM(CASE WHEN r.status = 'attended' THEN 1 ELSE 0 END), 0) AS attended
            FROM sessions s
            LEFT JOIN registrations r ON r.session_id = s.id AND r.status != 'cancelled'
            WHERE s.event_id = ?
            GROUP BY s.id
            ORDER BY s.starts_at
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.db)
        .await?;

        let mut stats = Vec::with_capacity(rows.len());
        for row in rows {
            let starts_at: String = row.try_get("starts_at")?;
            stats.push(SessionStats {
                session_id: row.try_get("id")?,
                session_name: row.try_get("name")?,
                starts_at: parse_datetime(&starts_at)?,
                registered: row.try_get("registered")?,
                attended: row.try_get("attended")?,
            });
        }
        Ok(stats)
    }

    async fn booth_stats(&self, event_id: &str) -> Result<Vec<BoothStats>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.name, b.capacity, COUNT(r.id) AS expected
            FROM booths b
            LEFT JOIN registrations r ON r.booth_id = b.id AND r.status != 'cancelled'
            WHERE b.event_id = ?
            GROUP BY b.id
            ORDER BY b.name
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.db)
        .await?;

        let mut stats = Vec::with_capacity(rows.len());
        for row in rows {
            let capacity: i64 = row.try_get("capacity")?;
            let expected: i64 = row.try_get("expected")?;
            stats.push(BoothStats {
                booth_id: row.try_get("id")?,
                booth_name: row.try_get("name")?,
                capacity,
                expected,
                utilization_pct: if capacity > 0 {
                    expected * 100 / capacity
                } else {
                    0
                },
            });
        }
        Ok(stats)
    }
}
