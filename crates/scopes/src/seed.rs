//! Seed data for the scope catalog.
//!
//! The built-in set mirrors the standard OAuth2 / OpenID Connect scopes plus
//! the business scopes the catalog ships with. A JSON file of records can be
//! loaded instead with [`load`].

use crate::catalog::{CatalogError, ScopeCatalog, ScopeRecord};
use std::path::Path;
use thiserror::Error;

/// Errors from loading a seed file.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid seed file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// `(id, code, label, comment)`
#[rustfmt::skip]
const BUILTIN: &[(&str, &str, &str, &str)] = &[
    // OAuth2 / OpenID Connect
    ("1", "openid", "OpenID Connect", "Scope obligatoire pour l'authentification OpenID Connect"),
    ("2", "profile", "Profil utilisateur", "Accès aux informations de profil de l'utilisateur"),
    ("3", "email", "Email", "Accès à l'adresse email de l'utilisateur"),
    ("4", "address", "Adresse", "Accès à l'adresse postale de l'utilisateur"),
    ("5", "phone", "Téléphone", "Accès au numéro de téléphone de l'utilisateur"),
    // data access
    ("6", "read", "Lecture", "Accès en lecture seule aux ressources"),
    ("7", "write", "Écriture", "Accès en écriture aux ressources"),
    ("8", "delete", "Suppression", "Autorisation de suppression des ressources"),
    ("9", "admin", "Administration", "Accès administrateur complet"),
    // users
    ("10", "user:read", "Lecture utilisateurs", "Consultation des données utilisateurs"),
    ("11", "user:write", "Modification utilisateurs", "Création et modification des utilisateurs"),
    ("12", "user:delete", "Suppression utilisateurs", "Suppression des comptes utilisateurs"),
    // resources
    ("13", "resource:read", "Lecture ressources", "Consultation des ressources"),
    ("14", "resource:write", "Modification ressources", "Création et modification des ressources"),
    ("15", "resource:delete", "Suppression ressources", "Suppression des ressources"),
    // reports and analytics
    ("16", "reports:read", "Lecture rapports", "Consultation des rapports"),
    ("17", "analytics:read", "Lecture analytics", "Accès aux données d'analyse"),
    // files
    ("18", "files:read", "Lecture fichiers", "Téléchargement et consultation des fichiers"),
    ("19", "files:write", "Écriture fichiers", "Upload et modification des fichiers"),
    ("20", "files:delete", "Suppression fichiers", "Suppression des fichiers"),
    // notifications
    ("21", "notifications:read", "Lecture notifications", "Consultation des notifications"),
    ("22", "notifications:write", "Envoi notifications", "Envoi de notifications"),
    // system settings
    ("23", "settings:read", "Lecture paramètres", "Consultation des paramètres système"),
    ("24", "settings:write", "Modification paramètres", "Modification des paramètres système"),
    // logs and audit
    ("25", "logs:read", "Lecture logs", "Consultation des logs système"),
    ("26", "audit:read", "Lecture audit", "Consultation des pistes d'audit"),
    // external APIs
    ("27", "api:read", "Lecture API", "Accès en lecture aux API externes"),
    ("28", "api:write", "Écriture API", "Accès en écriture aux API externes"),
    // sessions
    ("29", "session:manage", "Gestion sessions", "Gestion des sessions utilisateur"),
    ("30", "offline_access", "Accès hors ligne", "Permet l'obtention de refresh tokens"),
];

/// The built-in scope records, in catalog order.
pub fn builtin() -> Vec<ScopeRecord> {
    BUILTIN
        .iter()
        .map(|&(id, code, label, comment)| ScopeRecord::new(id, code, label, comment))
        .collect()
}

/// Load a catalog from a JSON array of scope records.
///
/// Fails if the file cannot be read, is not a list of records, or repeats a
/// code.
pub async fn load(path: &Path) -> Result<ScopeCatalog, SeedError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let records: Vec<ScopeRecord> = serde_json::from_str(&raw)?;
    let catalog = ScopeCatalog::from_records(records)?;
    tracing::info!(path = %path.display(), count = catalog.len(), "loaded scope seed file");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use crate::catalog::CatalogError;
    use crate::seed::{SeedError, builtin, load};
    use std::collections::HashSet;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn builtin_codes_are_unique() {
        let records = builtin();
        let codes: HashSet<_> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes.len(), records.len());
    }

    #[tokio::test]
    async fn loads_records_from_json() {
        let path = temp_file(
            "scopes_mcp_seed_ok.json",
            r#"[
                {"id": "1", "cdScope": "a:read", "lbScope": "Lecture A", "comment": "a"},
                {"id": "2", "code": "b:read", "label": "Lecture B", "comment": "b"}
            ]"#,
        );
        let catalog = load(&path).await.expect("valid seed");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.find_by_code("b:read").map(|r| r.label.as_str()),
            Some("Lecture B")
        );
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn rejects_repeated_codes() {
        let path = temp_file(
            "scopes_mcp_seed_dup.json",
            r#"[
                {"id": "1", "cdScope": "a", "lbScope": "A", "comment": ""},
                {"id": "2", "cdScope": "a", "lbScope": "A2", "comment": ""}
            ]"#,
        );
        let err = load(&path).await.expect_err("duplicate code");
        assert!(matches!(
            err,
            SeedError::Catalog(CatalogError::DuplicateCode(code)) if code == "a"
        ));
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let path = temp_file("scopes_mcp_seed_bad.json", r#"{"not": "a list"}"#);
        let err = load(&path).await.expect_err("not a list");
        assert!(matches!(err, SeedError::Json(_)));
        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("scopes_mcp_seed_does_not_exist.json");
        let err = load(&path).await.expect_err("missing");
        assert!(matches!(err, SeedError::Io(_)));
    }
}
