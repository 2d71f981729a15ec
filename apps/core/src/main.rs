// Taskwise backend entry point

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use taskwise_core::api::{self, AppState};
use taskwise_core::config::AppConfig;
use taskwise_core::{telemetry, TaskClassifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    telemetry::init(config.log_format)?;

    let app = api::router(AppState::new(TaskClassifier::new()));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
