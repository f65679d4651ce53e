use std::{future::Future, path::Path};

use axum::Router;
use common::utils::logging::LogFormat;
use configs::{AppConfig, DatabaseConfig, ServerConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`) when it exists, env vars otherwise.
///
/// A config file that exists but fails to parse or validate is an error.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    // a present file wins; env vars only apply when there is none
    if Path::new(&path).exists() {
        let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
        Ok(cfg)
    } else {
        let cfg = AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        Ok(cfg)
    }
}

pub fn log_format(cfg: &ServerConfig) -> LogFormat {
    cfg.log_format.parse().unwrap_or_else(|e: String| {
        warn!(error = %e, "falling back to compact log format");
        LogFormat::Compact
    })
}

/// Connect, migrate and optionally seed, then wire the service graph.
pub async fn build_state(cfg: &DatabaseConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    // schema first, then optional demo rows
    if cfg.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migration failed: {e}")))?;
        info!("migrations applied");
    }
    if cfg.seed_demo_data {
        let inserted = models::patient::seed_demo(&db)
            .await
            .map_err(|e| StartupError::Database(format!("seeding failed: {e}")))?;
        info!(inserted, "demo patients seeded");
    }

    // repository and service are built once and shared by every handler
    Ok(ServerState::new(db))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Run with an already-loaded config until `shutdown` resolves.
pub async fn run_with_config<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg.database).await?;
    let app = build_app(state);

    // [server] host/port; the logged address is the resolved one
    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "patient server listening");
    serve(listener, app, shutdown).await
}
