//! Store error types.

use thiserror::Error;

use centavo_shared::types::AccountId;

/// Errors surfaced by individual store operations.
///
/// An error from one step says nothing about the fate of the steps around
/// it; callers that issue several operations see each outcome separately.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No account row exists for the id.
    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    /// The backing store could not serve the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
