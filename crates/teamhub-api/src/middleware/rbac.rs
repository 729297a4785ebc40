//! Role authorization stage.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use teamhub_auth::{AllowedRoles, RequestContext};

use crate::error::ApiResult;

/// Lets the request through only if its attached role is in `allowed`.
///
/// Must run after `authenticate`; a request without a context is
/// treated as having no role.
pub async fn authorize(
    State(allowed): State<AllowedRoles>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let ctx = request.extensions().get::<RequestContext>();
    if let Err(e) = allowed.require(ctx.map(|c| c.role.as_str())) {
        tracing::warn!(
            user_id = ?ctx.map(|c| c.user_id),
            role = ?ctx.map(|c| c.role.as_str()),
            path = %request.uri().path(),
            "Role not permitted"
        );
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
