//! `AuthUser` extractor: reads the identity attached by the authentication stage.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use teamhub_auth::RequestContext;
use teamhub_core::error::AppError;

use crate::error::ApiError;

/// Extracted authenticated user context available in handlers.
///
/// Only usable on routes guarded by `middleware::auth::authenticate`;
/// elsewhere extraction fails as unauthenticated.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthenticated("Authentication required").into())
    }
}
