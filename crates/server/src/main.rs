//! healthspeak-server: HealthSpeak HTTP server binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthspeak_server::config::{Config, StoreBackend};
use healthspeak_server::db::{MemoryHistoryStore, PgHistoryStore, SharedStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();

    // Create the history store once; handlers share it through the router state
    let store: SharedStore = match config.store_backend {
        StoreBackend::Postgres => Arc::new(PgHistoryStore::connect(&config.database_url).await?),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory history store, records are lost on restart");
            Arc::new(MemoryHistoryStore::new())
        }
    };

    // Log startup info
    if config.google_api_key.is_some() {
        tracing::info!("GOOGLE_API_KEY configured, prescription translation enabled");
    } else {
        tracing::warn!("GOOGLE_API_KEY not set, prescription translation disabled");
    }
    if config.strict_validation {
        tracing::info!("Strict history validation enabled");
    }
    tracing::info!("Rate limiting: {} requests/second", config.rate_limit_rps);

    // Build application
    let app = healthspeak_server::build_app(store.clone(), &config);

    // Start server
    let addr: SocketAddr = config.bind_address.parse()?;
    tracing::info!("Starting HealthSpeak server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
