//! Nippo API Server Binary
//!
//! Starts the HTTP API serving daily reports, drivers and vehicles.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin nippo-api
//!
//! # Run with environment variables
//! NIPPO_PORT=8080 NIPPO_TENANT=sakura DATABASE_URL=postgres://... cargo run --bin nippo-api
//! ```
//!
//! # Environment Variables
//!
//! * `NIPPO_HOST` - Server host (default: 0.0.0.0)
//! * `NIPPO_PORT` - Server port (default: 8080)
//! * `NIPPO_JWT_SECRET` - Secret bearer tokens are verified against (required in production)
//! * `NIPPO_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `NIPPO_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `NIPPO_DB_ACQUIRE_TIMEOUT_SECS` - Wait for a pooled connection (default: 30)
//! * `NIPPO_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `NIPPO_LOG_FORMAT` - pretty or json (default: pretty)
//! * `NIPPO_TENANT` - Branding tenant code (default: default)
//! * `NIPPO_TIMEZONE` - IANA timezone for report dates (default: Asia/Tokyo)
//! * `NIPPO_RUN_MIGRATIONS` - Apply the bundled schema at startup (default: false)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresDeliveryAdapter};
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        tenant = %config.tenant,
        timezone = %config.timezone,
        "Starting nippo API server"
    );

    let pool = create_pool(
        DatabaseConfig::new(config.database_url.clone())
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout()),
    )
    .await
    .context("failed to connect to database")?;

    if config.run_migrations {
        run_migrations(&pool).await.context("failed to apply migrations")?;
    }

    let store = Arc::new(PostgresDeliveryAdapter::new(pool));
    let state = AppState::from_store(store, config.clone()).context("invalid server settings")?;
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid listen address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for Ctrl+C or SIGTERM so in-flight requests can finish
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
