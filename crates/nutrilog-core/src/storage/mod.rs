//! Blob store abstraction and implementations.
//!
//! The ledger persists its entire state as a single document under a fixed
//! key. This module defines the key-value contract the ledger consumes and
//! two backends: a JSON-file store for real use and an in-memory store for
//! tests and ephemeral sessions.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::BlobStore;
