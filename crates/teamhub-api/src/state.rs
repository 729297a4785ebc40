//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use teamhub_auth::{CredentialService, JwtDecoder, JwtEncoder, PasswordHasher};
use teamhub_core::config::AppConfig;
use teamhub_database::store::{RoleStore, UserStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything inside
/// is read-only after startup and `Arc`-wrapped for cheap cloning.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Registration and login
    pub credentials: Arc<CredentialService>,
    /// Bearer token verification
    pub jwt_decoder: Arc<JwtDecoder>,
}

impl AppState {
    /// Wires the auth components on top of the given stores.
    pub fn new(config: AppConfig, roles: Arc<dyn RoleStore>, users: Arc<dyn UserStore>) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let credentials = Arc::new(CredentialService::new(
            roles,
            users,
            Arc::new(PasswordHasher::new()),
            jwt_encoder,
        ));

        Self {
            config: Arc::new(config),
            credentials,
            jwt_decoder,
        }
    }
}
