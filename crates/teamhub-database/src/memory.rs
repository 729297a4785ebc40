//! In-memory role and user store backed by `DashMap`.
//!
//! Suitable for tests and single-process development runs only; nothing
//! survives a restart.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use teamhub_core::error::AppError;
use teamhub_core::result::AppResult;
use teamhub_entity::role::{CreateRole, Role};
use teamhub_entity::user::{CreateUser, User};

use crate::store::{RoleStore, UserStore};

/// Process-local store implementing both [`RoleStore`] and [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Roles keyed by name; the name is the uniqueness key.
    roles: DashMap<String, Role>,
    /// Users keyed by id; usernames may repeat.
    users: DashMap<Uuid, User>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        Ok(self.roles.get(name).map(|r| r.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .iter()
            .find(|r| r.value().id == id)
            .map(|r| r.value().clone()))
    }

    async fn create(&self, data: &CreateRole) -> AppResult<Role> {
        match self.roles.entry(data.name.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Role '{}' already exists",
                data.name
            ))),
            Entry::Vacant(slot) => {
                let role = Role::new(data.clone());
                slot.insert(role.clone());
                Ok(role)
            }
        }
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.iter().map(|r| r.value().clone()).collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let user = User::new(data.clone());
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.value().username == username)
            .min_by_key(|u| (u.value().created_at, u.value().id))
            .map(|u| u.value().clone()))
    }

    async fn count_by_username(&self, username: &str) -> AppResult<u64> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.value().username == username)
            .count() as u64)
    }
}
