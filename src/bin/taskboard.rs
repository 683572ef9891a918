//! Runs the taskboard HTTP server.
//!
//! Usage:
//!
//! ```text
//! taskboard [--config taskboard.toml] [--bind 127.0.0.1:8080]
//!           [--log-level info] [--log-file taskboard.log]
//! ```
//!
//! A representative configuration file is:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//!
//! [store]
//! backend = "postgres"
//! database_url = "postgres://taskboard@localhost/taskboard"
//! pool_size = 8
//!
//! [identity]
//! project_id = "my-project"
//! jwks_path = "securetoken-keys.json"
//!
//! [logging]
//! level = "info"
//! ```

use clap::Parser;
use std::sync::Arc;
use taskboard::config::{Args, Config, ConfigError};
use taskboard::identity::adapters::{JwksSetupError, JwksTokenVerifier};
use taskboard::store::{Repositories, StoreError};
use taskboard::telemetry::{self, TelemetryError};
use taskboard::web::{self, AppState};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to load identity provider keys: {0}")]
    Keys(#[from] JwksSetupError),
    #[error("failed to compile page templates: {0}")]
    Templates(#[from] minijinja::Error),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();
    let config = Config::resolve(&args)?;
    telemetry::init(&config.logging.level, config.logging.file.as_deref())?;

    let Some(jwks_path) = config.identity.jwks_path.as_deref() else {
        return Err(ConfigError::MissingIdentityProvider.into());
    };
    let verifier = JwksTokenVerifier::from_path(jwks_path, &config.identity.project_id)?;
    info!(keys = verifier.key_count(), "identity provider keys loaded");

    let repositories = Repositories::open(&config.store).await?;
    let state = AppState::new(&repositories, Arc::new(verifier))?;

    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    info!(address = %config.server.bind, "taskboard listening");
    axum::serve(listener, web::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("taskboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
