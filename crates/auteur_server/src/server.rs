//! Listener lifecycle.

use crate::{AppState, ServerConfig, create_router};
use auteur_error::{AuteurResult, ServerError, ServerErrorKind};
use auteur_pipeline::PipelineExecutor;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server loop fails.
#[instrument(skip(config, executor), fields(bind = %config.bind_address()))]
pub async fn serve(config: &ServerConfig, executor: PipelineExecutor) -> AuteurResult<()> {
    config.validate()?;
    let address = config.socket_addr()?;

    let listener = TcpListener::bind(address).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: address.to_string(),
            message: e.to_string(),
        })
    })?;

    let router = create_router(AppState::from_config(executor, config));
    info!(
        %address,
        max_duration_secs = config.max_duration_secs(),
        "Auteur server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Auteur server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
