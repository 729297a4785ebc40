//! # teamhub-api
//!
//! HTTP API layer for TeamHub built on Axum.
//!
//! Provides the auth and admin endpoints, the authentication and
//! authorization middleware stages, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
