//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jwt::Claims;

/// Identity decoded from a verified token.
///
/// Inserted into the request extensions by the authentication stage and
/// read by the authorization stage and handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username embedded in the token.
    pub username: String,
    /// The role name embedded in the token.
    pub role: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
            request_time: Utc::now(),
        }
    }
}
