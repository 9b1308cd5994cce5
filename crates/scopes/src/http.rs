//! Streamable HTTP transport for the scope server.
//!
//! Every MCP session gets a clone of the same [`ScopeServer`], so all HTTP
//! clients edit one catalog. Cancelling the token passed to [`router`] and
//! [`serve`] closes open event streams and stops the listener.

use crate::ScopeServer;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Errors from building the HTTP router.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HttpError {
    /// The mount path does not start with `/`.
    #[error("HTTP path must start with '/': {0}")]
    InvalidPath(String),
}

/// Build an axum router serving `server` at `path`.
///
/// A path of `/` serves every request; any other path is nested.
pub fn router(
    server: ScopeServer,
    path: &str,
    ct: CancellationToken,
) -> Result<axum::Router, HttpError> {
    if !path.starts_with('/') {
        return Err(HttpError::InvalidPath(path.to_string()));
    }

    let config = StreamableHttpServerConfig {
        cancellation_token: ct.child_token(),
        ..Default::default()
    };
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        config,
    );

    Ok(if path == "/" {
        axum::Router::new().fallback_service(service)
    } else {
        axum::Router::new().nest_service(path, service)
    })
}

/// Serve `app` on `listener` until `ct` is cancelled.
pub async fn serve(
    listener: TcpListener,
    app: axum::Router,
    ct: CancellationToken,
) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(ct.cancelled_owned())
        .await
}
