//! In-memory blob store.
//!
//! Backs a ledger with a plain map. Used by tests and by embedders that
//! want an ephemeral session. Can be told to fail saves so the
//! persistence-failure policy (mutation applied, error surfaced) is
//! testable without touching a filesystem.

use std::collections::HashMap;

use crate::error::{LedgerError, Result};

/// Blob store holding documents in a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document, as if a previous session had saved it.
    pub fn with_document(key: impl Into<String>, document: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.documents.insert(key.into(), document.into());
        store
    }

    /// Make every subsequent `save` fail with a storage error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Direct read access for assertions.
    pub fn document(&self, key: &str) -> Option<&String> {
        self.documents.get(key)
    }
}

impl super::BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents.get(key).cloned())
    }

    fn save(&mut self, key: &str, document: &str) -> Result<()> {
        if self.fail_saves {
            return Err(LedgerError::Storage("save failure injected".to_string()));
        }
        self.documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
