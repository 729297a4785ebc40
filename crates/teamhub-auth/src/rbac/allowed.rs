//! Immutable allowed-role sets bound to protected routes.

use std::collections::HashSet;
use std::sync::Arc;

use teamhub_core::error::AppError;

/// The set of role names permitted on a protected route.
///
/// Built once when the router is assembled and shared by every request
/// that passes through the guard. Names compare exactly.
#[derive(Debug, Clone)]
pub struct AllowedRoles(Arc<HashSet<String>>);

impl AllowedRoles {
    /// Creates a set from role names.
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Arc::new(roles.into_iter().map(Into::into).collect()))
    }

    /// Whether the role is a member of the set.
    pub fn permits(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    /// Checks the role attached to a request, if any.
    ///
    /// Returns `Err(AppError::Forbidden)` when no role is attached or the
    /// role is outside the set.
    pub fn require(&self, role: Option<&str>) -> Result<(), AppError> {
        match role {
            None | Some("") => Err(AppError::forbidden("No role assigned to the user.")),
            Some(role) if self.permits(role) => Ok(()),
            Some(_) => Err(AppError::forbidden("Access denied.")),
        }
    }
}
