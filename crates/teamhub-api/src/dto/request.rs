//! Request DTOs.
//!
//! Fields are taken as sent. Empty credentials are not rejected here:
//! registration resolves the role first, and login reports an unknown
//! user or a wrong password.

use serde::{Deserialize, Serialize};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Username.
    pub username: String,
    /// Plaintext password; hashed before it is stored.
    pub password: String,
    /// Name of an existing role.
    pub role: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}
