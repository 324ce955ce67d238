//! Refund engine: sender-gated reversal of logged transfers.

use std::sync::Arc;

use tracing::{error, info};

use centavo_shared::types::{AccountId, TransactionId};

use super::error::LedgerError;
use super::types::{RefundReceipt, TransactionStatus};
use crate::store::LedgerStore;

/// Reverses the balance effect of previously logged transfers.
///
/// Authorization checks that the requester is the transaction's source
/// account. The current status is not consulted: once the ownership check
/// passes, the reversal runs, so a transaction already marked REFUNDED is
/// reversed again on a repeat request. The destination debit, source
/// credit, and status write each commit on their own, with the status write
/// last.
pub struct RefundEngine {
    store: Arc<dyn LedgerStore>,
}

impl RefundEngine {
    /// Creates an engine over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Reverses the balance effect of `transaction_id` on behalf of
    /// `requester`.
    ///
    /// A failed balance mutation or status write is logged and the
    /// remaining steps still run; the receipt records which steps landed.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Forbidden` when the requester is not
    /// the source account, `Store` when the lookup itself fails.
    pub async fn refund(
        &self,
        requester: AccountId,
        transaction_id: TransactionId,
    ) -> Result<RefundReceipt, LedgerError> {
        let tx = self
            .store
            .transaction(transaction_id)
            .await?
            .ok_or(LedgerError::NotFound(transaction_id))?;

        if tx.source != requester {
            return Err(LedgerError::Forbidden(transaction_id));
        }

        let destination_debited = match self.store.debit(tx.destination, tx.amount).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    error = %e,
                    destination = %tx.destination,
                    "failed to debit refund destination"
                );
                false
            }
        };

        let source_credited = match self.store.credit(tx.source, tx.amount).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, source = %tx.source, "failed to credit refund source");
                false
            }
        };

        if let Err(e) = self
            .store
            .set_transaction_status(transaction_id, TransactionStatus::Refunded)
            .await
        {
            error!(
                error = %e,
                transaction_id = %transaction_id,
                "failed to mark transaction refunded"
            );
        }

        info!(
            transaction_id = %transaction_id,
            amount = %tx.amount,
            "refund applied"
        );

        Ok(RefundReceipt {
            transaction_id,
            amount: tx.amount,
            destination_debited,
            source_credited,
        })
    }
}
