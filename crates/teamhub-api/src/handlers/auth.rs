//! Auth handlers: register, login, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state
        .credentials
        .register(&req.username, &req.password, &req.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully.")),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = state
        .credentials
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        role: outcome.role,
    }))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse::new(state.credentials.logout()))
}
