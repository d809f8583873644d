//! API request handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::analytics::AnalyticsService;
use crate::dispatch::{Dispatcher, NotificationKind, TriggerRequest};
use crate::schedule::ScheduleStore;
use crate::transport::HttpEmailTransport;

/// Shared application state
pub struct AppState {
    pub dispatcher: Dispatcher<ScheduleStore, HttpEmailTransport>,
    pub analytics: AnalyticsService,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// POST /api/notifications/session-reminders
pub async fn session_reminders(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    dispatch(state, NotificationKind::SessionReminder, &body).await
}

/// POST /api/notifications/daily-agenda
pub async fn daily_agenda(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    dispatch(state, NotificationKind::DailyDigest, &body).await
}

async fn dispatch(
    state: Arc<AppState>,
    kind: NotificationKind,
    body: &[u8],
) -> axum::response::Response {
    // An absent or unparsable body selects the scheduled production path.
    let trigger: TriggerRequest = serde_json::from_slice(body).unwrap_or_default();

    match state.dispatcher.run(kind, &trigger).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            error!("Dispatch run {} failed: {}", kind.as_str(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(&e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /api/events/:event_id/analytics
pub async fn event_analytics(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.analytics.event_analytics(&event_id).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            error!("Analytics query for {} failed: {}", event_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(&e.to_string())),
            )
                .into_response()
        }
    }
}
