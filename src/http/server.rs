//! HTTP server startup logic.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::config::HttpServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bind the configured address and serve `app` until a shutdown signal.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &HttpServerConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Starting HTTP server");

    serve(listener, app, Duration::from_secs(config.shutdown_timeout_seconds)).await
}

/// Serve on an already bound listener, draining connections for at most `grace`
/// after a shutdown signal.
pub async fn serve(listener: TcpListener, app: Router, grace: Duration) -> Result<(), ServerError> {
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = drain_rx.await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map_err(ServerError::from),
        () = shutdown::shutdown_signal() => {}
    }

    let _ = drain_tx.send(());
    tracing::info!(
        grace_secs = grace.as_secs(),
        "Graceful shutdown initiated, waiting for connections to close"
    );

    match tokio::time::timeout(grace, server).await {
        Ok(result) => result.map_err(ServerError::from),
        Err(_) => {
            tracing::warn!("Grace period elapsed, dropping remaining connections");
            Ok(())
        }
    }
}
