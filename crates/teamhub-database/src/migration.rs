//! Schema migrations embedded from `migrations/` at build time.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use teamhub_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every embedded migration the database has not seen yet.
///
/// Already-applied versions are skipped, so this is safe to call on
/// every start.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let latest = MIGRATOR.iter().map(|m| m.version).max();
    info!(
        embedded = MIGRATOR.iter().count(),
        latest_version = ?latest,
        "Applying schema migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Persistence,
            format!("Schema migration failed: {e}"),
            e,
        )
    })?;

    info!(schema_version = ?latest, "Schema is up to date");
    Ok(())
}
