//! Employee store that dispatches to the configured provider.

use std::sync::Arc;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use roster_core::config::DatabaseConfig;
use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;

use crate::repositories::{EmployeeRepository, MemoryEmployeeRepository, PgEmployeeRepository};

/// Schema for the `employees` table, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// The employee repository selected at startup, plus the pool behind it.
///
/// `pool` is `None` for the in-memory provider.
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    repository: Arc<dyn EmployeeRepository>,
    pool: Option<PgPool>,
}

impl EmployeeStore {
    /// Build the store named by `config.provider`.
    ///
    /// For PostgreSQL this opens the pool and, when `auto_migrate` is set,
    /// applies pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                let pool = open_pool(config).await?;
                let store = Self {
                    repository: Arc::new(PgEmployeeRepository::new(pool.clone())),
                    pool: Some(pool),
                };
                if config.auto_migrate {
                    store.migrate().await?;
                }
                Ok(store)
            }
            "memory" => {
                info!("Initializing in-memory employee store");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Create an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(MemoryEmployeeRepository::new()))
    }

    /// Wrap an existing repository (for testing).
    pub fn from_repository(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            repository,
            pool: None,
        }
    }

    /// The repository handle to inject into services.
    pub fn repository(&self) -> Arc<dyn EmployeeRepository> {
        Arc::clone(&self.repository)
    }

    /// Apply pending schema migrations.
    ///
    /// Only a PostgreSQL-backed store has a schema; any other store returns
    /// a `Configuration` error.
    pub async fn migrate(&self) -> AppResult<()> {
        let Some(pool) = &self.pool else {
            return Err(AppError::configuration(
                "Migrations require the postgres provider",
            ));
        };

        info!("Applying employee schema migrations");
        MIGRATOR.run(pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;
        info!("Employee schema is up to date");
        Ok(())
    }

    /// Release database connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
            info!("Employee store connections closed");
        }
    }
}

/// Open the PostgreSQL pool described by `config`.
async fn open_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Connecting PostgreSQL employee store"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to {}: {e}", config.redacted_url()),
                e,
            )
        })
}
