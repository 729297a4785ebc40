//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user.
///
/// `username` is the login lookup key but carries no uniqueness
/// constraint; see `UserStore::find_by_username` for how duplicates resolve.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// The role this user belongs to.
    pub role_id: Uuid,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh user record from creation data.
    pub fn new(data: CreateUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: data.username,
            password_hash: data.password_hash,
            role_id: data.role_id,
            created_at: Utc::now(),
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Resolved role reference.
    pub role_id: Uuid,
}
