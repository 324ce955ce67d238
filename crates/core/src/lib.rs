//! Core business logic for Centavo.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and engine state
//! machines live here.
//!
//! # Modules
//!
//! - `auth` - Credential-to-identity resolution
//! - `ledger` - Transfer, refund, and statement engines
//! - `store` - Injectable account/transaction-log store abstraction

pub mod auth;
pub mod ledger;
pub mod store;
