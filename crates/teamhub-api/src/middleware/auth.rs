//! Bearer token authentication stage.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;

use teamhub_auth::RequestContext;
use teamhub_core::error::AppError;

use crate::error::ApiResult;
use crate::state::AppState;

/// Verifies the bearer token and attaches a [`RequestContext`] to the request.
///
/// The context is also copied onto the response for the access log.
///
/// Missing, malformed, forged, and expired tokens all end the request as
/// unauthenticated.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let claims = {
        let token = bearer_token(request.headers())?;
        state.jwt_decoder.decode(token)?
    };

    let ctx = RequestContext::from(claims);
    tracing::debug!(user_id = %ctx.user_id, role = %ctx.role, "Request authenticated");
    request.extensions_mut().insert(ctx.clone());

    let mut response = next.run(request).await;
    response.extensions_mut().insert(ctx);
    Ok(response)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?
        .to_str()
        .map_err(|_| AppError::unauthenticated("Invalid Authorization header format"))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))
}
