//! Transfer engine: validates and executes balance moves between accounts.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info};

use centavo_shared::types::{AccountId, Cents};

use super::error::LedgerError;
use super::types::{NewTransaction, TransactionStatus, TransferReceipt};
use super::validation::{check_amount, check_funds};
use crate::store::LedgerStore;

/// Executes peer-to-peer transfers against the shared store.
///
/// A transfer is a sequence of independently committed store calls: read the
/// sender balance, wait out the compliance hold, debit the sender, credit
/// the recipient, append a log record. Nothing pins the sender balance
/// between the read and the debit, and nothing ties the debit and credit
/// together.
pub struct TransferEngine {
    store: Arc<dyn LedgerStore>,
    compliance_hold: Duration,
}

impl TransferEngine {
    /// Creates an engine over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>, compliance_hold: Duration) -> Self {
        Self {
            store,
            compliance_hold,
        }
    }

    /// Moves `amount` from `sender` to `recipient`.
    ///
    /// Caller-visible success is decided by the sender debit alone. A
    /// recipient credit or log append that fails after the debit committed
    /// is logged and swallowed; the receipt records what actually landed.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for a non-positive amount, `InsufficientFunds` when
    /// the balance snapshot is short, `Store` when the balance read or the
    /// sender debit fails.
    pub async fn transfer(
        &self,
        sender: AccountId,
        recipient: AccountId,
        amount: Cents,
    ) -> Result<TransferReceipt, LedgerError> {
        check_amount(amount)?;

        let balance = self.store.balance_of(sender).await?;
        check_funds(balance, amount)?;

        // Compliance and fraud screening window, a call out to an external
        // service in production. The balance snapshot above is not pinned;
        // concurrent transfers from the same sender keep running while this
        // one waits.
        tokio::time::sleep(self.compliance_hold).await;

        self.store.debit(sender, amount).await?;

        let credited = match self.store.credit(recipient, amount).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    error = %e,
                    recipient = %recipient,
                    "CRITICAL: failed to credit recipient after sender debit"
                );
                false
            }
        };

        let transaction_id = match self
            .store
            .append_transaction(NewTransaction {
                source: sender,
                destination: recipient,
                amount,
                timestamp: Utc::now(),
                status: TransactionStatus::Completed,
            })
            .await
        {
            Ok(tx) => Some(tx.id),
            Err(e) => {
                error!(error = %e, "failed to append transfer to the transaction log");
                None
            }
        };

        info!(
            sender = %sender,
            recipient = %recipient,
            amount = %amount,
            credited,
            "transfer applied"
        );

        Ok(TransferReceipt {
            transaction_id,
            credited,
        })
    }
}
