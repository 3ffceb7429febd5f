//! # Nutrilog Core
//!
//! Core library for Nutrilog - a personal nutrition log that records foods
//! eaten against meals and derives daily totals against configurable goals.
//!
//! This crate provides the nutrition ledger (the persisted store of foods,
//! log entries, and goal settings) and the aggregation engine, independent
//! of any user interface.
//!
//! ## Architecture
//!
//! - **types**: Domain records and the persisted snapshot document
//! - **storage**: Blob store trait and implementations (JSON file, memory)
//! - **ledger**: The ledger store - mutations, reads, persistence
//! - **aggregate**: Pure per-day and per-meal nutrition summaries
//! - **parse**: Tolerant numeric input parsing at the ledger boundary
//! - **seed**: Starter food catalog used when no saved ledger exists

pub mod aggregate;
pub mod error;
pub mod ledger;
pub mod parse;
pub mod seed;
pub mod storage;
pub mod types;

pub use error::{LedgerError, Result};
pub use ledger::LedgerStore;
pub use storage::BlobStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
