//! In-memory storage backend for the ledger.
//!
//! This crate provides:
//! - [`MemoryStore`], a concurrent-map implementation of `LedgerStore`
//! - Seed data for the demo accounts

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
pub use seed::seed_accounts;
