//! In-memory scope catalog.
//!
//! Records are kept in insertion order and keyed by their `code`. A code is
//! never rewritten after insertion, so the uniqueness check done by
//! [`ScopeCatalog::add`] holds for the lifetime of the catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from catalog mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record with this code is already in the catalog.
    #[error("scope already exists: {0}")]
    DuplicateCode(String),
    /// No record carries this code.
    #[error("scope not found: {0}")]
    NotFound(String),
}

/// One grantable permission scope.
///
/// Serialized with the field names used by the scope tools on the wire
/// (`cdScope`, `lbScope`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRecord {
    /// Opaque, caller-supplied identifier.
    pub id: String,
    /// Machine-readable scope token, e.g. `user:read`.
    #[serde(rename = "cdScope", alias = "code")]
    pub code: String,
    /// Human-readable short name.
    #[serde(rename = "lbScope", alias = "label")]
    pub label: String,
    /// Free-text description.
    pub comment: String,
}

impl ScopeRecord {
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        label: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            label: label.into(),
            comment: comment.into(),
        }
    }
}

/// Ordered registry of scope records.
#[derive(Debug, Clone, Default)]
pub struct ScopeCatalog {
    records: Vec<ScopeRecord>,
}

impl ScopeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in scope set.
    pub fn seeded() -> Self {
        Self {
            records: crate::seed::builtin(),
        }
    }

    /// Build a catalog from records, rejecting any repeated code.
    pub fn from_records(
        records: impl IntoIterator<Item = ScopeRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for record in records {
            catalog.add(record)?;
        }
        Ok(catalog)
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<ScopeRecord> {
        self.records.clone()
    }

    pub fn find_by_code(&self, code: &str) -> Option<&ScopeRecord> {
        self.records.iter().find(|r| r.code == code)
    }

    /// Records whose label contains `needle`, ignoring case.
    pub fn find_by_label(&self, needle: &str) -> Vec<ScopeRecord> {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.label.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn exists(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Append a record unless its code is already taken.
    pub fn add(&mut self, record: ScopeRecord) -> Result<(), CatalogError> {
        if self.exists(&record.code) {
            return Err(CatalogError::DuplicateCode(record.code));
        }
        tracing::debug!(code = %record.code, "scope added");
        self.records.push(record);
        Ok(())
    }

    /// Replace the label and comment of the record with this code.
    pub fn update(
        &mut self,
        code: &str,
        label: impl Into<String>,
        comment: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.code == code)
            .ok_or_else(|| CatalogError::NotFound(code.to_string()))?;
        record.label = label.into();
        record.comment = comment.into();
        tracing::debug!(code, "scope updated");
        Ok(())
    }

    /// Remove the record with this code, keeping the order of the others.
    pub fn remove(&mut self, code: &str) -> Result<ScopeRecord, CatalogError> {
        let idx = self
            .records
            .iter()
            .position(|r| r.code == code)
            .ok_or_else(|| CatalogError::NotFound(code.to_string()))?;
        tracing::debug!(code, "scope removed");
        Ok(self.records.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
