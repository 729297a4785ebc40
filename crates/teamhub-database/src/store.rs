//! Store traits behind which every persistence backend sits.

use async_trait::async_trait;
use uuid::Uuid;

use teamhub_core::result::AppResult;
use teamhub_entity::role::{CreateRole, Role};
use teamhub_entity::user::{CreateUser, User};

/// Access to role records.
///
/// Role names are unique; `create` fails with `ErrorKind::Conflict` when
/// the name is taken.
#[async_trait]
pub trait RoleStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a role by its exact name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Find a role by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>>;

    /// Create a new role and return it.
    async fn create(&self, data: &CreateRole) -> AppResult<Role>;

    /// List all roles ordered by name.
    async fn list(&self) -> AppResult<Vec<Role>>;
}

/// Access to user records.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Create a new user and return it.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Find a user by exact username.
    ///
    /// Usernames are not unique. When several users share one, the
    /// earliest-created user is returned.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Count the users registered under a username.
    async fn count_by_username(&self, username: &str) -> AppResult<u64>;
}
