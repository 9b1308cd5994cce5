//! Binary entry point for the scopes-mcp server.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rmcp::ServiceExt;
use scopes_mcp::{ScopeServer, catalog::ScopeCatalog, http};
use std::{net::SocketAddr, path::PathBuf};
use tokio_util::sync::CancellationToken;

/// Scope Catalog MCP Server — exposes OAuth2/OIDC access scopes as MCP tools.
#[derive(Parser)]
#[command(name = "scopes-mcp", version, about)]
struct Cli {
    /// JSON file of scope records to seed the catalog with, instead of the
    /// built-in set.
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Serve over streamable HTTP on this address instead of stdio.
    #[arg(long, value_name = "ADDR")]
    http: Option<SocketAddr>,

    /// Path the HTTP endpoint is mounted at.
    #[arg(long, value_name = "PATH", default_value = "/mcp", requires = "http")]
    path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let catalog = match &cli.seed {
        Some(path) => scopes_mcp::seed::load(path)
            .await
            .with_context(|| format!("failed to load seed file {}", path.display()))?,
        None => ScopeCatalog::seeded(),
    };
    tracing::info!(count = catalog.len(), "scope catalog ready");
    let server = ScopeServer::new(catalog);

    match cli.http {
        Some(addr) => serve_http(server, addr, &cli.path).await,
        None => serve_stdio(server).await,
    }
}

async fn serve_stdio(server: ScopeServer) -> Result<()> {
    let transport = rmcp::transport::stdio();
    server
        .serve(transport)
        .await
        .map_err(|e| anyhow!("failed to start server: {e}"))?
        .waiting()
        .await
        .context("server error")?;
    Ok(())
}

async fn serve_http(server: ScopeServer, addr: SocketAddr, path: &str) -> Result<()> {
    let ct = CancellationToken::new();
    let app = http::router(server, path, ct.clone())?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, path, "serving scope catalog over streamable HTTP");

    let shutdown = ct.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("shutting down");
        shutdown.cancel();
    });
    http::serve(listener, app, ct).await.context("server error")?;
    Ok(())
}
