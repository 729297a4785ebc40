//! Admin-only handlers.

use axum::Json;

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;

/// GET /api/admin/admin-dashboard
pub async fn dashboard(auth: AuthUser) -> Json<MessageResponse> {
    tracing::debug!(user_id = %auth.user_id, username = %auth.username, "Admin dashboard opened");
    Json(MessageResponse::new("Welcome to the Admin Dashboard!"))
}
