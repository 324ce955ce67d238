//! Credential-to-identity resolution.
//!
//! This module provides:
//! - The authorizer mapping an opaque API key to an account identity
//! - Error types for failed resolution

use std::sync::Arc;

use thiserror::Error;

use centavo_shared::types::AccountId;

use crate::store::{LedgerStore, StoreError};

/// Errors returned by credential resolution.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential was presented.
    #[error("Missing API Key")]
    MissingCredential,

    /// The credential does not match any stored account.
    #[error("Invalid API Key")]
    UnknownCredential,

    /// The credential lookup itself failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_api_key",
            Self::UnknownCredential => "invalid_api_key",
            Self::Store(_) => "store_error",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingCredential | Self::UnknownCredential => 401,
            Self::Store(_) => 500,
        }
    }
}

/// Resolves opaque API keys to account identities.
///
/// Resolution has no side effects; the transport layer binds the resolved
/// id to the request context for the rest of handling.
#[derive(Clone)]
pub struct Authorizer {
    store: Arc<dyn LedgerStore>,
}

impl Authorizer {
    /// Creates an authorizer over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Maps a credential to the account that owns it.
    ///
    /// # Errors
    ///
    /// `MissingCredential` when the key is empty, `UnknownCredential` when
    /// no account owns it, `Store` when the lookup fails.
    pub async fn resolve(&self, api_key: &str) -> Result<AccountId, AuthError> {
        if api_key.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        match self.store.account_id_for_key(api_key).await? {
            Some(id) => Ok(id),
            None => Err(AuthError::UnknownCredential),
        }
    }
}
