//! Landing and health check handlers.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /
pub async fn welcome() -> &'static str {
    "Welcome to the Team Collaboration Platform!"
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
