//! Role seeding configuration.

use serde::{Deserialize, Serialize};

/// Roles ensured to exist when the server starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolesConfig {
    /// Role definitions; existing roles with the same name are left untouched.
    #[serde(default)]
    pub seed: Vec<RoleSeed>,
}

/// A single seeded role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSeed {
    /// Unique role name, e.g. `"Admin"`.
    pub name: String,
    /// Permission strings attached to the role.
    #[serde(default)]
    pub permissions: Vec<String>,
}
