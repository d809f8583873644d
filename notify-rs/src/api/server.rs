//! API Server - HTTP surface for the notification service

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::handlers::{self, AppState};

/// HTTP server wiring the dispatcher and analytics behind the invocation
/// contract used by the platform's scheduler and dashboard.
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    pub fn new(state: AppState, addr: String) -> Self {
        Self {
            state: Arc::new(state),
            addr,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // Fixed permissive CORS header set; answers OPTIONS preflight
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/health", get(handlers::health))
            .route(
                "/api/notifications/session-reminders",
                post(handlers::session_reminders),
            )
            .route(
                "/api/notifications/daily-agenda",
                post(handlers::daily_agenda),
            )
            .route(
                "/api/events/:event_id/analytics",
                get(handlers::event_analytics),
            )
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
