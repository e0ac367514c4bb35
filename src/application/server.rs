use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::application::routes::app_router;
use crate::application::state::AppState;
use crate::infrastructure::workers_ai::WorkersAiGenerator;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub upstream_url: String,
    pub account_id: String,
    pub api_token: String,
    pub model: String,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let generator = WorkersAiGenerator::new(
        &config.upstream_url,
        &config.account_id,
        config.api_token,
        &config.model,
    )
    .context("failed to build Workers AI client")?;

    let state = AppState::new(Arc::new(generator));
    let app = app_router(state);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    info!(
        address = %config.bind_address,
        model = %config.model,
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
