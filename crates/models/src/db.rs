use std::{str::FromStr, time::Duration};

use configs::DatabaseConfig;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::info;

use crate::errors::ModelError;

/// Connect with pool sizing and timeouts taken from `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    if is_in_memory_sqlite(&cfg.url) {
        return connect_in_memory_sqlite(cfg).await;
    }

    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

/// An in-memory SQLite database lives exactly as long as its one connection,
/// so the pool holds a single connection that is never reaped or recycled.
async fn connect_in_memory_sqlite(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    use sea_orm::sqlx::ConnectOptions as _;

    let mut sqlite_opts = SqliteConnectOptions::from_str(&cfg.url)?;
    if !cfg.sqlx_logging {
        sqlite_opts = sqlite_opts.disable_statement_logging();
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(sqlite_opts)
        .await?;

    info!(backend = "sqlite", in_memory = true, "database connected");
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Round-trip a trivial statement to check the pool is usable.
pub async fn ping(db: &DatabaseConnection) -> Result<(), ModelError> {
    db.ping().await?;
    Ok(())
}

pub fn is_in_memory_sqlite(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("sqlite:") && (lower.contains(":memory:") || lower.contains("mode=memory"))
}
