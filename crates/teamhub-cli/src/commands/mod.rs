//! CLI command definitions and dispatch.

pub mod migrate;
pub mod role;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use teamhub_core::config::{AppConfig, DatabaseProvider};
use teamhub_core::error::AppError;
use teamhub_database::DatabasePool;

/// TeamHub: team collaboration platform administration
#[derive(Debug, Parser)]
#[command(name = "teamhub-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Role management
    Role(role::RoleArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Role(args) => role::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    tracing::debug!(path = %config_path, "Loading configuration");
    AppConfig::load_file(config_path)
}

/// Helper: connect to the configured PostgreSQL database
///
/// The in-memory provider has nothing to administer across processes, so
/// it is rejected here.
pub async fn create_db_pool(config: &AppConfig) -> Result<DatabasePool, AppError> {
    if config.database.provider != DatabaseProvider::Postgres {
        return Err(AppError::configuration(
            "CLI commands require database.provider = \"postgres\"",
        ));
    }
    DatabasePool::connect(&config.database).await
}
