//! Blob store trait definition.
//!
//! The `BlobStore` trait is the interface the ledger uses for durability.
//! It is an opaque key-value contract: the ledger hands over one serialized
//! document per key and asks for it back. Backends decide where and how the
//! bytes live.

use crate::error::Result;

/// Key-value blob storage consumed by the ledger.
///
/// Implementations must ensure:
/// - An absent key loads as `Ok(None)`, never an error
/// - `save` replaces the previous document for the key atomically, so a
///   reader never observes a partially written document
pub trait BlobStore: Send {
    /// Load the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the backend cannot be read at all.
    /// A missing document is `Ok(None)`, not an error.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `document` under `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the document cannot be written.
    fn save(&mut self, key: &str, document: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_boxed(_store: Box<dyn BlobStore>) {}
    }
}
