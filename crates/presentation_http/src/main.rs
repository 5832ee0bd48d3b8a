//! weathercast HTTP server
//!
//! Main entry point for the weather webhook.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use anyhow::Context;
use infrastructure::{AppConfig, build_services, init_tracing};
use presentation_http::{AppState, create_router, set_expose_internal_errors};
use tokio::{net::TcpListener, signal, sync::Notify};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    info!("🌤️ weathercast v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        environment = %config.environment,
        default_city = %config.weather.default_city,
        cache_ttl_secs = config.weather.cache_ttl_secs,
        "Configuration loaded"
    );

    set_expose_internal_errors(!config.environment.is_production());

    let services = build_services(&config).context("Failed to initialize weather service")?;
    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    let app = create_router(AppState::new(services.weather, config));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("🚀 Server listening on http://{}", addr);

    let shutdown_started = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown_started = Arc::clone(&shutdown_started);
            async move {
                shutdown_signal().await;
                shutdown_started.notify_one();
            }
        })
        .into_future();

    tokio::select! {
        result = server => result?,
        () = async {
            shutdown_started.notified().await;
            info!("⏳ Waiting up to {:?} for connections to close...", shutdown_timeout);
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Connections still open after {:?}, exiting", shutdown_timeout);
        }
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
