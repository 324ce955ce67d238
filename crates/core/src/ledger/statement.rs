//! Statement reporter: source-filtered transaction history.

use std::sync::Arc;

use centavo_shared::types::AccountId;

use super::error::LedgerError;
use super::types::StatementRow;
use crate::store::LedgerStore;

/// Reads outbound transaction history for an account selector.
///
/// The selector is taken as supplied by the caller and is never compared
/// against the requesting identity; any authenticated caller can read any
/// account's outbound rows.
pub struct StatementReporter {
    store: Arc<dyn LedgerStore>,
}

impl StatementReporter {
    /// Creates a reporter over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Returns the log rows whose source is `selector`, oldest first.
    ///
    /// An unknown selector yields an empty list.
    ///
    /// # Errors
    ///
    /// `Store` when the log read fails.
    pub async fn statement(&self, selector: AccountId) -> Result<Vec<StatementRow>, LedgerError> {
        let rows = self.store.transactions_from(selector).await?;
        Ok(rows.into_iter().map(StatementRow::from).collect())
    }
}
