//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named permission group that users are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Unique role name, compared exactly during authorization.
    pub name: String,
    /// Permission strings, in the order they were defined.
    pub permissions: Vec<String>,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Build a fresh role record from creation data.
    pub fn new(data: CreateRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            permissions: data.permissions,
            created_at: Utc::now(),
        }
    }
}

/// Data required to create a new role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRole {
    /// Desired role name.
    pub name: String,
    /// Initial permission list.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CreateRole {
    /// Role creation data with no permissions.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_default_to_empty() {
        let data: CreateRole = serde_json::from_str(r#"{"name":"Member"}"#).unwrap();
        let role = Role::new(data);
        assert_eq!(role.name, "Member");
        assert!(role.permissions.is_empty());
    }
}
