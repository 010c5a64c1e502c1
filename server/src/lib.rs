//! # portfolio-server
//!
//! Static HTTP origin for the portfolio site. Serves the page, its
//! stylesheet and script bootstrap, and the compiled WASM bundle.

pub mod config;
pub mod routes;

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the configured address and serve until the process stops.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be bound and
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    run(listener, &config).await
}

/// Serve on an already-bound listener.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the accept loop fails.
pub async fn run(listener: TcpListener, config: &ServerConfig) -> Result<(), ServerError> {
    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, website = %config.website_dir.display(), "portfolio listening");
    }
    axum::serve(listener, routes::app(config))
        .await
        .map_err(ServerError::Serve)
}
