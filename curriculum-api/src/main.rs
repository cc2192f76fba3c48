//! curriculum-api - Curriculum catalog service
//!
//! Loads the curriculum source file into the course store on startup and
//! serves the tag-filtered course views over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use curriculum_common::config::{CliOverrides, ServiceConfig};
use curriculum_common::db::init_database;
use curriculum_common::loader::load_curriculum;
use curriculum_common::CourseStore;
use curriculum_api::catalog::spawn_load_catalog;
use curriculum_api::{build_router, AppState, CatalogStatus};
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for curriculum-api
///
/// Anything not given here falls back to the environment, then the config
/// file, then the compiled defaults.
#[derive(Parser, Debug)]
#[command(name = "curriculum-api")]
#[command(about = "Curriculum catalog HTTP service")]
#[command(version)]
struct Args {
    /// Port to listen on [env: PORT]
    #[arg(short, long)]
    port: Option<u16>,

    /// Curriculum source file [env: CURRICULUM_SOURCE]
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// SQLite database URL [env: CURRICULUM_DATABASE_URL]
    #[arg(long)]
    database_url: Option<String>,

    /// TOML config file [env: CURRICULUM_CONFIG]
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServiceConfig::resolve(&CliOverrides {
        port: args.port,
        source_file: args.source,
        database_url: args.database_url,
        config_file: args.config,
    })
    .context("Failed to resolve configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before any I/O can stall startup
    info!(
        "Starting curriculum-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Source file: {}", config.source_file.display());
    info!("Database: {}", config.database_url);

    // A missing or malformed source file aborts startup
    let entries = load_curriculum(&config.source_file).with_context(|| {
        format!(
            "Failed to load curriculum from {}",
            config.source_file.display()
        )
    })?;

    let (status_tx, status_rx) = watch::channel(CatalogStatus::Loading);

    // Connection failure keeps the routes up; they answer 500 until restart
    let store = match init_database(&config.database_url).await {
        Ok(pool) => {
            info!("✓ Connected to course store");
            let store = CourseStore::new(pool);
            spawn_load_catalog(store.clone(), entries, status_tx);
            Some(store)
        }
        Err(e) => {
            error!("Course store connection error: {}", e);
            status_tx.send_replace(CatalogStatus::Failed {
                reason: format!("course store connection failed: {}", e),
            });
            None
        }
    };

    let state = AppState::new(store.clone(), status_rx);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server is running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(store) = store {
        store.close().await;
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
