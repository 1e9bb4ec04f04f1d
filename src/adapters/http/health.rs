//! Liveness endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::ports::SessionStore;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub sessions: usize,
}

/// GET /health
async fn health(State(sessions): State<Arc<dyn SessionStore>>) -> (StatusCode, Json<HealthResponse>) {
    match sessions.count().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                sessions: count,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    version: env!("CARGO_PKG_VERSION"),
                    sessions: 0,
                }),
            )
        }
    }
}

pub fn health_routes(sessions: Arc<dyn SessionStore>) -> Router {
    Router::new().route("/health", get(health)).with_state(sessions)
}
