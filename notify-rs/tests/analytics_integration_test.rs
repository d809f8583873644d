//! Integration tests for event analytics

use chrono::{Duration, Utc};
use notify_rs::analytics::AnalyticsService;
use notify_rs::schedule::ScheduleStore;
use sqlx::SqlitePool;
use uuid::Uuid;

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    ScheduleStore::new(pool.clone()).init_db().await.unwrap();

    sqlx::query("INSERT INTO events (id, name) VALUES ('ev', 'Test Expo')")
        .execute(&pool)
        .await
        .unwrap();
    pool
}

async fn seed_session(pool: &SqlitePool, session_id: &str, name: &str, offset_hours: i64) {
    let starts_at = Utc::now() + Duration::hours(offset_hours);
    sqlx::query(
        r#"
        INSERT INTO sessions (id, event_id, name, starts_at, ends_at)
        VALUES (?, 'ev', ?, ?, ?)
        "#,
    )
    .bind(session_id)
    .bind(name)
    .bind(starts_at.to_rfc3339())
    .bind((starts_at + Duration::hours(1)).to_rfc3339())
    .execute(pool)
    .await
    .unwrap();
}

async fn seed_registration(
    pool: &SqlitePool,
    session_id: &str,
    booth_id: Option<&str>,
    status: &str,
) {
    let attendee_id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO attendees (id, event_id, name, email) VALUES (?, 'ev', 'A', ?)")
        .bind(&attendee_id)
        .bind(format!("{}@test.example", &attendee_id[..8]))
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(
        r#"
        INSERT INTO registrations (id, event_id, session_id, attendee_id, booth_id, status)
        VALUES (?, 'ev', ?, ?, ?, ?)
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(session_id)
    .bind(&attendee_id)
    .bind(booth_id)
    .bind(status)
    .execute(pool)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_session_counts_exclude_cancellations() {
    let pool = setup_pool().await;
    seed_session(&pool, "sess-1", "Keynote", 1).await;

    seed_registration(&pool, "sess-1", None, "registered").await;
    seed_registration(&pool, "sess-1", None, "registered").await;
    seed_registration(&pool, "sess-1", None, "attended").await;
    seed_registration(&pool, "sess-1", None, "cancelled").await;

    let analytics = AnalyticsService::new(pool);
    let summary = analytics.event_analytics("ev").await.unwrap();

    assert_eq!(summary.sessions.len(), 1);
    let session = &summary.sessions[0];
    assert_eq!(session.session_name, "Keynote");
    assert_eq!(session.registered, 3);
    assert_eq!(session.attended, 1);
}

#[tokio::test]
async fn test_sessions_ordered_by_start_time() {
    let pool = setup_pool().await;
    seed_session(&pool, "sess-late", "Closing", 8).await;
    seed_session(&pool, "sess-early", "Opening", 1).await;

    let analytics = AnalyticsService::new(pool);
    let summary = analytics.event_analytics("ev").await.unwrap();

    let names: Vec<&str> = summary
        .sessions
        .iter()
        .map(|s| s.session_name.as_str())
        .collect();
    assert_eq!(names, vec!["Opening", "Closing"]);
}

#[tokio::test]
async fn test_booth_utilization_against_capacity() {
    let pool = setup_pool().await;
    seed_session(&pool, "sess-1", "Booth Meetings", 2).await;

    sqlx::query(
        r#"
        INSERT INTO booths (id, event_id, name, capacity, is_sponsor)
        VALUES ('booth-1', 'ev', 'Acme Booth', 4, 1)
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    seed_registration(&pool, "sess-1", Some("booth-1"), "registered").await;
    seed_registration(&pool, "sess-1", Some("booth-1"), "registered").await;
    seed_registration(&pool, "sess-1", Some("booth-1"), "cancelled").await;

    let analytics = AnalyticsService::new(pool);
    let summary = analytics.event_analytics("ev").await.unwrap();

    assert_eq!(summary.booths.len(), 1);
    let booth = &summary.booths[0];
    assert_eq!(booth.capacity, 4);
    assert_eq!(booth.expected, 2);
    assert_eq!(booth.utilization_pct, 50);
}

#[tokio::test]
async fn test_zero_capacity_booth_reports_zero_utilization() {
    let pool = setup_pool().await;

    sqlx::query(
        r#"
        INSERT INTO booths (id, event_id, name, capacity, is_sponsor)
        VALUES ('booth-1', 'ev', 'Pop-up Stand', 0, 0)
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let analytics = AnalyticsService::new(pool);
    let summary = analytics.event_analytics("ev").await.unwrap();

    assert_eq!(summary.booths[0].expected, 0);
    assert_eq!(summary.booths[0].utilization_pct, 0);
}

#[tokio::test]
async fn test_unknown_event_yields_empty_summary() {
    let pool = setup_pool().await;
    let analytics = AnalyticsService::new(pool);

    let summary = analytics.event_analytics("nope").await.unwrap();
    assert!(summary.sessions.is_empty());
    assert!(summary.booths.is_empty());
}
