//! Tool implementations for the scope catalog MCP server.
//!
//! Tool names, descriptions and argument names follow the scope tool surface
//! agents already call. A missing or duplicate scope is an ordinary result
//! (`false`, `null` or an empty list), never a tool error.

use crate::ScopeServer;
use crate::catalog::{ScopeCatalog, ScopeRecord};
use rmcp::{
    handler::server::wrapper::Parameters,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Parameters for tools addressing a scope by its code.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CodeParams {
    /// Exact scope code, e.g. "user:read".
    pub code: String,
}

/// Parameters for searching scopes by label.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LabelParams {
    /// Part of the label to look for, case-insensitive.
    pub label: String,
}

/// Parameters for updating a scope.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScopeParams {
    /// Code of the scope to update.
    pub code: String,
    /// New label.
    pub new_label: String,
    /// New comment.
    pub new_comment: String,
}

/// Parameters for adding a scope.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddScopeParams {
    /// Identifier of the new scope.
    pub id: String,
    /// Code of the new scope; must not already exist.
    #[serde(rename = "cdScope")]
    pub code: String,
    /// Label of the new scope.
    #[serde(rename = "lbScope")]
    pub label: String,
    /// Description of the new scope.
    pub comment: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

#[tool_router]
impl ScopeServer {
    /// Create a new scope server over the given catalog.
    pub fn new(catalog: ScopeCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "listScope",
        description = "Récupère la liste complète des scopes disponibles"
    )]
    async fn list_scope(&self) -> Result<String, String> {
        let catalog = self.catalog.read().await;
        to_json(&catalog.list())
    }

    /// Look up a scope by exact code; `null` when absent.
    #[tool(name = "findScopeByCode", description = "Recherche un scope par son code")]
    async fn find_scope_by_code(
        &self,
        Parameters(params): Parameters<CodeParams>,
    ) -> Result<String, String> {
        let catalog = self.catalog.read().await;
        to_json(&catalog.find_by_code(&params.code))
    }

    #[tool(
        name = "findScopesByLabel",
        description = "Recherche des scopes par libellé (recherche partielle)"
    )]
    async fn find_scopes_by_label(
        &self,
        Parameters(params): Parameters<LabelParams>,
    ) -> Result<String, String> {
        let catalog = self.catalog.read().await;
        to_json(&catalog.find_by_label(&params.label))
    }

    #[tool(name = "removeScopeByCode", description = "Supprime un scope par son code")]
    async fn remove_scope_by_code(&self, Parameters(params): Parameters<CodeParams>) -> String {
        let mut catalog = self.catalog.write().await;
        match catalog.remove(&params.code) {
            Ok(_) => true.to_string(),
            Err(e) => {
                tracing::debug!("removeScopeByCode: {e}");
                false.to_string()
            }
        }
    }

    /// Replace label and comment; the id and code never change.
    #[tool(name = "updateScope", description = "Met à jour un scope existant")]
    async fn update_scope(&self, Parameters(params): Parameters<UpdateScopeParams>) -> String {
        let mut catalog = self.catalog.write().await;
        match catalog.update(&params.code, params.new_label, params.new_comment) {
            Ok(()) => true.to_string(),
            Err(e) => {
                tracing::debug!("updateScope: {e}");
                false.to_string()
            }
        }
    }

    #[tool(name = "scopeExists", description = "Vérifie si un scope existe")]
    async fn scope_exists(&self, Parameters(params): Parameters<CodeParams>) -> String {
        self.catalog.read().await.exists(&params.code).to_string()
    }

    #[tool(name = "addScope", description = "Ajoute un nouveau scope à la liste")]
    async fn add_scope(&self, Parameters(params): Parameters<AddScopeParams>) -> String {
        let record = ScopeRecord::new(params.id, params.code, params.label, params.comment);
        let mut catalog = self.catalog.write().await;
        match catalog.add(record) {
            Ok(()) => true.to_string(),
            Err(e) => {
                tracing::debug!("addScope: {e}");
                false.to_string()
            }
        }
    }

    #[tool(name = "getScopeCount", description = "Récupère le nombre total de scopes")]
    async fn get_scope_count(&self) -> String {
        self.catalog.read().await.len().to_string()
    }
}
