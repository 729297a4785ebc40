//! Route definitions for the TeamHub HTTP API.
//!
//! API routes are mounted under `/api`. Protected groups are wrapped by
//! [`guarded`], which fixes the stage order: authenticate, then authorize.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};

use teamhub_auth::AllowedRoles;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and per-route guards.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(admin_routes(&state))
        .merge(health_routes());

    Router::new()
        .route("/", get(handlers::health::welcome))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Auth endpoints: register, login, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Admin endpoints, restricted to the Admin role
fn admin_routes(state: &AppState) -> Router<AppState> {
    guarded(
        Router::new().route("/admin/admin-dashboard", get(handlers::admin::dashboard)),
        state,
        AllowedRoles::new(["Admin"]),
    )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Put `routes` behind authentication followed by authorization for `allowed`.
///
/// Layers wrap inside-out, so the authentication layer is added last to
/// make it the outermost stage.
pub fn guarded(
    routes: Router<AppState>,
    state: &AppState,
    allowed: AllowedRoles,
) -> Router<AppState> {
    routes
        .route_layer(from_fn_with_state(allowed, middleware::rbac::authorize))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ))
}
