//! Inventory Hub - an inventory REST backend
//!
//! Products, Categories and Suppliers with many-to-many relations, plus a
//! TTL-cached first page for product and supplier listings.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod services;
mod store;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::spawn_sweep_task;

/// Main entry point for the inventory server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the seeded store and page caches
/// 4. Start the background envelope sweep tasks
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_hub=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Inventory Hub server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, default_page_size={}, cache_ttl={}s, sweep_interval={}s",
        config.server_port, config.default_page_size, config.cache_ttl_secs, config.sweep_interval_secs
    );

    // Create application state with seeded store and empty page caches
    let state = AppState::from_config(&config);
    info!("Entity store seeded, page caches initialized");

    // Start background sweep tasks, one per cached entity kind
    let sweep_handles = vec![
        spawn_sweep_task(
            state.product_pages.clone(),
            "product",
            config.sweep_interval_secs,
        ),
        spawn_sweep_task(
            state.supplier_pages.clone(),
            "supplier",
            config.sweep_interval_secs,
        ),
    ];

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handles))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep tasks and allows graceful shutdown.
async fn shutdown_signal(sweep_handles: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the sweep tasks
    for handle in sweep_handles {
        handle.abort();
    }
    warn!("Sweep tasks aborted");
}
