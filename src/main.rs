//! TeamHub Server: team collaboration backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use teamhub_api::{AppState, build_app, run_server};
use teamhub_core::config::{AppConfig, DatabaseProvider};
use teamhub_core::error::AppError;
use teamhub_database::repositories::{PgRoleRepository, PgUserRepository};
use teamhub_database::{DatabasePool, MemoryStore, RoleStore, UserStore};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    dotenv::dotenv().ok();

    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(cause = ?e.cause(), "Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `TEAMHUB_CONFIG`, or from `config/` for `TEAMHUB_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("TEAMHUB_CONFIG") {
        Ok(path) => AppConfig::load_file(&path),
        Err(_) => {
            let env = std::env::var("TEAMHUB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Role and user stores selected by `database.provider`.
struct Stores {
    roles: Arc<dyn RoleStore>,
    users: Arc<dyn UserStore>,
    pool: Option<DatabasePool>,
}

async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    match config.database.provider {
        DatabaseProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                teamhub_database::migration::run_migrations(pool.pool()).await?;
            }
            Ok(Stores {
                roles: Arc::new(PgRoleRepository::new(pool.pool().clone())),
                users: Arc::new(PgUserRepository::new(pool.pool().clone())),
                pool: Some(pool),
            })
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            let store = Arc::new(MemoryStore::new());
            let roles: Arc<dyn RoleStore> = store.clone();
            let users: Arc<dyn UserStore> = store;
            Ok(Stores {
                roles,
                users,
                pool: None,
            })
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TeamHub v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.uses_default_secret() {
        tracing::warn!("auth.jwt_secret is the shipped placeholder; set JWT_SECRET before deploying");
    }

    let stores = open_stores(&config).await?;

    let seeded =
        teamhub_database::seed::ensure_roles(stores.roles.as_ref(), &config.roles.seed).await?;
    tracing::info!(seeded, configured = config.roles.seed.len(), "Role seeding complete");

    let server_config = config.server.clone();
    let state = AppState::new(config, stores.roles, stores.users);
    let result = run_server(&server_config, build_app(state)).await;

    if let Some(pool) = stores.pool {
        pool.close().await;
    }

    result
}
