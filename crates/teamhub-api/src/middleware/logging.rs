//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

use teamhub_auth::RequestContext;

/// Logs method, path, status, and latency of every request.
///
/// On guarded routes the authentication stage copies its
/// [`RequestContext`] onto the response, so the caller's user and role
/// are logged too.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();
    let ctx = response.extensions().get::<RequestContext>();
    let user_id = ctx.map(|c| c.user_id.to_string());
    let role = ctx.map(|c| c.role.as_str());

    if response.status().is_server_error() {
        warn!(%method, %path, status, elapsed_ms, user_id, role, "Request failed");
    } else {
        info!(%method, %path, status, elapsed_ms, user_id, role, "Request handled");
    }

    response
}
