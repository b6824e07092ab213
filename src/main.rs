//! OpenRouter relay server
//!
//! Persistent-process entry point: serves `/api/chat` until shut down.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info, warn};

use openrouter_relay::{routes, AppState, Config, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openrouter_relay=info,tower_http=info".into()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting OpenRouter relay");

    let config = Config::from_env()?;
    let server = ServerConfig::from_env()?;
    if !config.has_fallback_key() {
        warn!(
            "OPENROUTER_API_KEY is not set; \
             requests without an x-api-key header will be rejected"
        );
    }
    info!(
        upstream = %config.openrouter_api_url,
        max_body_bytes = server.max_body_bytes,
        "Configuration loaded successfully"
    );

    routes::metrics::init_metrics()?;
    info!("Metrics initialized");

    let state = Arc::new(AppState::new(config)?.with_max_body_bytes(server.max_body_bytes));
    let app = routes::create_router(state);

    let addr: SocketAddr = format!("{}:{}", server.host, server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Relay shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating shutdown");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating shutdown");
        }
    }
}
