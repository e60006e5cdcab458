//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::infrastructure::configuration::HttpServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Installs the SIGINT/SIGTERM handler and blocks until the server has
/// drained and shut down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr = config
        .socket_addr()
        .map_err(|_| ServerError::Address(format!("{}:{}", config.host, config.port)))?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone(), config.shutdown_grace());

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` signals shutdown.
///
/// Bind failures surface here. Use `handle.listening()` to learn the bound
/// address when `addr` has port 0.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
