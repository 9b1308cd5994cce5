//! MCP server exposing a catalog of OAuth2 / OpenID Connect access scopes.
//!
//! The catalog lives in memory for the lifetime of the process and is shared
//! by every session. Eight tools list, search and edit it; see [`tools`].

use catalog::ScopeCatalog;
use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod catalog;
pub mod http;
pub mod seed;
pub mod tools;

/// MCP scope catalog server.
///
/// Clones share one catalog. Each tool call takes the catalog lock exactly
/// once, so calls never observe a half-applied mutation.
#[derive(Debug, Clone)]
pub struct ScopeServer {
    pub(crate) catalog: Arc<RwLock<ScopeCatalog>>,
    pub(crate) tool_router: ToolRouter<Self>,
}

impl Default for ScopeServer {
    fn default() -> Self {
        Self::new(ScopeCatalog::seeded())
    }
}

#[tool_handler]
impl ServerHandler for ScopeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "scopes-mcp".into(),
                title: Some("Scope Catalog MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Scope catalog server providing lookup and editing of OAuth2/OIDC access scopes."
                    .into(),
            ),
        }
    }
}
