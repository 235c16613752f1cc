use axum::{routing::get, Json, Router};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving requests.
    pub status: &'static str,
    /// Current server time, RFC 3339 in UTC with millisecond precision.
    pub timestamp: String,
}

/// GET /health -- liveness probe. Does not touch the database.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
