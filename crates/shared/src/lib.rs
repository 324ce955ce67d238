//! Shared types and configuration for Centavo.
//!
//! This crate provides common types used across all other crates:
//! - Integer cent amounts for exact balance arithmetic
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
