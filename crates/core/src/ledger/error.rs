//! Ledger error types.
//!
//! This module defines the errors surfaced by the transfer, refund, and
//! statement operations: request validation failures, refund gating
//! failures, and store failures that abort an operation's primary step.

use thiserror::Error;

use centavo_shared::types::TransactionId;

use crate::store::StoreError;

/// Errors that can occur during ledger operations.
///
/// Only failures of an operation's primary step are surfaced through this
/// type; a secondary step that fails after the primary step committed is
/// logged by the engine and never reaches the caller.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Transfer amount was zero or negative.
    #[error("Amount must be positive")]
    InvalidAmount,

    /// Sender balance was below the requested amount when it was read.
    #[error("Insufficient funds")]
    InsufficientFunds,

    // ========== Refund Errors ==========
    /// No transaction with this id exists in the log.
    #[error("Transaction not found")]
    NotFound(TransactionId),

    /// The requester is not the transaction's source account.
    #[error("Only the sender of transaction {0} may refund it")]
    Forbidden(TransactionId),

    // ========== Store Errors ==========
    /// The underlying store failed during the operation's primary step.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "invalid_amount",
            Self::InsufficientFunds => "insufficient_funds",
            Self::NotFound(_) => "not_found",
            Self::Forbidden(_) => "forbidden",
            Self::Store(_) => "store_error",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::InvalidAmount | Self::InsufficientFunds => 400,

            // 403 Forbidden - requester is not the sender
            Self::Forbidden(_) => 403,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 500 Internal Server Error
            Self::Store(_) => 500,
        }
    }
}
