//! Credential service: registration, login, and logout.

use std::sync::Arc;

use tracing::{info, warn};

use teamhub_core::error::{AppError, ErrorKind};
use teamhub_core::result::AppResult;
use teamhub_database::store::{RoleStore, UserStore};
use teamhub_entity::user::{CreateUser, User};

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

const REGISTER_FAILED: &str = "Error registering user.";
const LOGIN_FAILED: &str = "Error logging in.";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Signed token for subsequent requests.
    pub token: String,
    /// Name of the user's role.
    pub role: String,
}

/// Registers users and exchanges credentials for tokens.
#[derive(Debug, Clone)]
pub struct CredentialService {
    roles: Arc<dyn RoleStore>,
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl CredentialService {
    /// Creates a new credential service.
    pub fn new(
        roles: Arc<dyn RoleStore>,
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            roles,
            users,
            hasher,
            encoder,
        }
    }

    /// Registers a user under an existing role.
    ///
    /// Fails with `InvalidRole` when `role_name` does not name a role.
    /// Store and hashing failures keep their kind and carry the original
    /// error as cause. No token is issued.
    pub async fn register(&self, username: &str, password: &str, role_name: &str) -> AppResult<User> {
        let role = self
            .roles
            .find_by_name(role_name)
            .await
            .map_err(|e| e.context(REGISTER_FAILED))?
            .ok_or_else(|| AppError::invalid_role("Invalid role."))?;

        let existing = self
            .users
            .count_by_username(username)
            .await
            .map_err(|e| e.context(REGISTER_FAILED))?;
        if existing > 0 {
            warn!(
                username = %username,
                existing,
                "Registering duplicate username; login will resolve to the oldest account"
            );
        }

        let password_hash = self
            .hash(password.to_string())
            .await
            .map_err(|e| e.context(REGISTER_FAILED))?;

        let user = self
            .users
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                role_id: role.id,
            })
            .await
            .map_err(|e| e.context(REGISTER_FAILED))?;

        info!(user_id = %user.id, username = %user.username, role = %role.name, "User registered");
        Ok(user)
    }

    /// Verifies credentials and issues a one-hour token.
    ///
    /// Fails with `NotFound` for an unknown username and `Unauthorized`
    /// for a password mismatch.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(|e| e.context(LOGIN_FAILED))?
            .ok_or_else(|| {
                warn!(username = %username, "Login for unknown user");
                AppError::not_found("User not found.")
            })?;

        let matches = self
            .verify(password.to_string(), user.password_hash.clone())
            .await
            .map_err(|e| e.context(LOGIN_FAILED))?;
        if !matches {
            warn!(user_id = %user.id, username = %user.username, "Login with invalid password");
            return Err(AppError::unauthorized("Invalid password."));
        }

        let role = self
            .roles
            .find_by_id(user.role_id)
            .await
            .map_err(|e| e.context(LOGIN_FAILED))?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Role {} referenced by user {} does not exist",
                    user.role_id, user.id
                ))
                .context(LOGIN_FAILED)
            })?;

        let issued = self
            .encoder
            .issue(user.id, &user.username, &role.name)
            .map_err(|e| e.context(LOGIN_FAILED))?;

        info!(
            user_id = %user.id,
            role = %role.name,
            expires_at = %issued.expires_at,
            "User logged in"
        );
        Ok(LoginOutcome {
            token: issued.token,
            role: role.name,
        })
    }

    /// Acknowledges a logout.
    ///
    /// Tokens are stateless: nothing is invalidated and an issued token
    /// stays valid until it expires.
    pub fn logout(&self) -> &'static str {
        "Logout successful."
    }

    async fn hash(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Password hashing task failed", e))?
    }

    async fn verify(&self, password: String, hash: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Password verification task failed", e)
            })?
    }
}
