//! Startup role seeding.

use tracing::{debug, info};

use teamhub_core::config::RoleSeed;
use teamhub_core::error::ErrorKind;
use teamhub_core::result::AppResult;
use teamhub_entity::role::CreateRole;

use crate::store::RoleStore;

/// Ensure every seeded role exists, creating the missing ones.
///
/// Existing roles are left as they are, including their permissions.
/// Returns the number of roles created.
pub async fn ensure_roles(store: &dyn RoleStore, seeds: &[RoleSeed]) -> AppResult<usize> {
    let mut created = 0;

    for seed in seeds {
        if store.find_by_name(&seed.name).await?.is_some() {
            debug!(role = %seed.name, "Seed role already present");
            continue;
        }

        let data = CreateRole {
            name: seed.name.clone(),
            permissions: seed.permissions.clone(),
        };
        match store.create(&data).await {
            Ok(role) => {
                info!(role = %role.name, role_id = %role.id, "Seeded role");
                created += 1;
            }
            // Another instance won the race.
            Err(e) if e.kind == ErrorKind::Conflict => {}
            Err(e) => return Err(e),
        }
    }

    Ok(created)
}
