//! Tablepeek API - Table Catalog Dump Service
//!
//! Serves a single page: the list of tables in the configured
//! PostgreSQL database, dumped as pretty-printed text.
//!
//! The root route has two modes:
//! - `tables` (default when DATABASE_URL is set): run the catalog
//!   listing against the configured database and dump the rows
//! - `hello`: serve the greeting literal, no database required

mod config;
mod db;
mod error;
mod render;
mod routes;
mod state;

use crate::config::{IndexMode, Settings};
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🚀 Starting Tablepeek - Table Catalog Dump Service...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    // In tables mode the database pool is required - fail fast without it
    let state = match settings.mode {
        IndexMode::Tables => match db::init_pool(&settings.database).await {
            Ok(pool) => {
                info!("✅ Database pool created successfully");
                Arc::new(AppState::with_pool(pool))
            }
            Err(e) => {
                error!("❌ FATAL: Failed to initialize database pool: {}", e);
                error!("DATABASE_URL must be set and the database must be accessible");
                anyhow::bail!("cannot start in tables mode without a database connection");
            }
        },
        IndexMode::Hello => {
            info!("👋 Running in hello mode, no database required");
            Arc::new(AppState::without_pool())
        }
    };

    // Build the router
    let app = create_router(state, settings.mode);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 Endpoints:");
    match settings.mode {
        IndexMode::Tables => info!("   GET /        - table catalog dump"),
        IndexMode::Hello => info!("   GET /        - greeting"),
    }
    info!("   GET /health  - health check");
    info!("");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tablepeek_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
