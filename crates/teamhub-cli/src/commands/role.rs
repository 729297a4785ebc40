//! Role management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use validator::Validate;

use crate::output::{self, OutputFormat};
use teamhub_core::error::AppError;
use teamhub_database::RoleStore;
use teamhub_database::repositories::PgRoleRepository;
use teamhub_entity::role::{CreateRole, Role};

/// Arguments for role commands
#[derive(Debug, Args)]
pub struct RoleArgs {
    /// Role subcommand
    #[command(subcommand)]
    pub command: RoleCommand,
}

/// Role subcommands
#[derive(Debug, Subcommand)]
pub enum RoleCommand {
    /// Create a role
    Create {
        /// Role name, matched exactly at registration
        name: String,
        /// Permission granted by the role (repeatable)
        #[arg(short, long = "permission")]
        permissions: Vec<String>,
    },
    /// List all roles
    List,
}

/// Validated input for `role create`
#[derive(Debug, Validate)]
struct NewRole {
    #[validate(length(min = 1, max = 64, message = "Role name must be 1 to 64 characters"))]
    name: String,
    #[validate(length(max = 32, message = "At most 32 permissions per role"))]
    permissions: Vec<String>,
}

impl NewRole {
    fn parse(name: &str, permissions: &[String]) -> Result<CreateRole, AppError> {
        let input = Self {
            name: name.trim().to_string(),
            permissions: permissions
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
        };
        input
            .validate()
            .map_err(|e| AppError::validation(format!("Invalid role: {e}")))?;

        Ok(CreateRole {
            name: input.name,
            permissions: input.permissions,
        })
    }
}

/// Role display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RoleRow {
    /// Role ID
    id: String,
    /// Name
    name: String,
    /// Permissions
    permissions: String,
    /// Created at
    created_at: String,
}

impl From<&Role> for RoleRow {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name.clone(),
            permissions: role.permissions.join(", "),
            created_at: role.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute role commands
pub async fn execute(
    args: &RoleArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let role_repo = PgRoleRepository::new(pool.pool().clone());

    let result = run(&role_repo, &args.command, format).await;
    pool.close().await;
    result
}

async fn run(
    role_repo: &PgRoleRepository,
    command: &RoleCommand,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        RoleCommand::Create { name, permissions } => {
            let role = role_repo.create(&NewRole::parse(name, permissions)?).await?;

            output::print_success(&format!("Role '{}' created", role.name));
            output::print_item(&RoleRow::from(&role), format);
        }
        RoleCommand::List => {
            let rows: Vec<RoleRow> = role_repo.list().await?.iter().map(RoleRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
