//! Domain types for accounts and the transaction log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use centavo_shared::types::{AccountId, Cents, TransactionId};

/// A ledger account.
///
/// Accounts are created once at service initialization and never deleted.
/// The balance field is mutated in place by the transfer and refund engines;
/// nothing in the type keeps it non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Store-assigned identity.
    pub id: AccountId,
    /// Display name.
    pub username: String,
    /// Current balance in the smallest currency unit.
    pub balance: Cents,
    /// Opaque credential, read only by the authorizer. Never serialized.
    pub api_key: String,
}

/// Lifecycle status of a logged transaction.
///
/// The only defined transition is COMPLETED to REFUNDED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// The transfer was applied and logged.
    Completed,
    /// A refund has reversed the transfer's balance effect.
    Refunded,
}

/// A logged transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identity.
    pub id: TransactionId,
    /// Account the amount was taken from.
    pub source: AccountId,
    /// Account the amount was sent to.
    pub destination: AccountId,
    /// Transferred amount.
    pub amount: Cents,
    /// Wall-clock time the transfer was logged.
    pub timestamp: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: TransactionStatus,
}

/// Fields of a transaction record before the store assigns its id.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Account the amount was taken from.
    pub source: AccountId,
    /// Account the amount was sent to.
    pub destination: AccountId,
    /// Transferred amount.
    pub amount: Cents,
    /// Wall-clock time of the transfer.
    pub timestamp: DateTime<Utc>,
    /// Initial status.
    pub status: TransactionStatus,
}

/// Partial transaction record returned by the statement reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRow {
    /// Transaction identity.
    pub id: TransactionId,
    /// Transferred amount.
    pub amount: Cents,
    /// Status at read time.
    pub status: TransactionStatus,
}

impl From<Transaction> for StatementRow {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            amount: tx.amount,
            status: tx.status,
        }
    }
}

/// What the transfer engine observed while applying a transfer.
///
/// A receipt is returned for every caller-visible success; its fields record
/// which of the trailing steps actually landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Log entry id, or `None` when the log append failed after the debit.
    pub transaction_id: Option<TransactionId>,
    /// Whether the recipient credit landed.
    pub credited: bool,
}

/// What the refund engine observed while reversing a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefundReceipt {
    /// The reversed transaction.
    pub transaction_id: TransactionId,
    /// Amount moved back from destination to source.
    pub amount: Cents,
    /// Whether the destination debit landed.
    pub destination_debited: bool,
    /// Whether the source credit landed.
    pub source_credited: bool,
}
