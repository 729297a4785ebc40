//! # teamhub-auth
//!
//! Authentication and authorization building blocks for TeamHub.
//!
//! ## Modules
//!
//! - `jwt`: token claims, signing, and verification
//! - `password`: Argon2id password hashing
//! - `rbac`: immutable allowed-role sets for route guards
//! - `context`: the identity attached to an authenticated request
//! - `credentials`: registration, login, and logout

pub mod context;
pub mod credentials;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use context::RequestContext;
pub use credentials::{CredentialService, LoginOutcome};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rbac::AllowedRoles;
