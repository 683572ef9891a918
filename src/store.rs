//! Store construction: one pair of repositories built at startup and shared
//! by every service.

use crate::board::{
    adapters::{memory::InMemoryBoardRepository, postgres::PostgresBoardRepository},
    ports::BoardRepository,
};
use crate::config::{StoreBackend, StoreConfig};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Schema applied to `PostgreSQL` stores at startup.
pub const SCHEMA_SQL: &str =
    include_str!("../migrations/2024-07-01-000000_create_boards_and_tasks/up.sql");

/// Shared `PostgreSQL` connection pool.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors raised while opening the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The postgres backend was selected without a database URL.
    #[error("no database URL configured")]
    MissingDatabaseUrl,

    /// The connection pool was asked for zero connections.
    #[error("pool size must be at least 1")]
    InvalidPoolSize,

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Applying the schema failed.
    #[error("failed to apply schema: {0}")]
    Schema(#[from] diesel::result::Error),

    /// The blocking setup task failed to run.
    #[error("store setup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Repository handles injected into the services.
#[derive(Clone)]
pub struct Repositories {
    /// Board repository.
    pub boards: Arc<dyn BoardRepository>,
    /// Task repository.
    pub tasks: Arc<dyn TaskRepository>,
}

impl Repositories {
    /// Creates empty in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            boards: Arc::new(InMemoryBoardRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
        }
    }

    /// Creates repositories sharing one `PostgreSQL` pool.
    #[must_use]
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            boards: Arc::new(PostgresBoardRepository::new(pool.clone())),
            tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
        }
    }

    /// Opens the configured backend. `PostgreSQL` stores get their schema
    /// applied before use.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the pool cannot be built or the schema
    /// cannot be applied.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        match config.backend {
            StoreBackend::Memory => {
                info!("using in-memory store");
                Ok(Self::in_memory())
            }
            StoreBackend::Postgres => {
                let url = config
                    .database_url
                    .clone()
                    .ok_or(StoreError::MissingDatabaseUrl)?;
                let pool_size = config.pool_size;
                let pool = tokio::task::spawn_blocking(move || {
                    let connected = connect(&url, pool_size)?;
                    apply_schema(&connected)?;
                    Ok::<_, StoreError>(connected)
                })
                .await??;
                info!(pool_size, "using postgres store");
                Ok(Self::postgres(&pool))
            }
        }
    }
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`StoreError::InvalidPoolSize`] for a zero `pool_size` and
/// [`StoreError::Pool`] when no connection can be established.
pub fn connect(database_url: &str, pool_size: u32) -> Result<PgPool, StoreError> {
    if pool_size == 0 {
        return Err(StoreError::InvalidPoolSize);
    }
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(pool_size).build(manager)?)
}

/// Creates the board and task tables when absent.
///
/// # Errors
///
/// Returns [`StoreError`] when no connection is available or a statement
/// fails.
pub fn apply_schema(pool: &PgPool) -> Result<(), StoreError> {
    let mut connection = pool.get()?;
    connection.batch_execute(SCHEMA_SQL)?;
    Ok(())
}
