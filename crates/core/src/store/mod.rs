//! Injectable store abstraction for accounts and the transaction log.
//!
//! The engines never talk to a concrete backend; they hold a shared
//! [`LedgerStore`] handle and issue single-record operations against it.
//! Every operation commits or fails on its own. The trait offers no
//! multi-record transaction: the check-then-act sequences in the engines
//! span several calls, and nothing here serializes them.

mod error;

pub use error::StoreError;

use async_trait::async_trait;

use centavo_shared::types::{AccountId, Cents, TransactionId};

use crate::ledger::{NewTransaction, Transaction, TransactionStatus};

/// Shared account store and transaction log.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Reads the current balance of an account.
    async fn balance_of(&self, id: AccountId) -> Result<Cents, StoreError>;

    /// Atomically adds `amount` to one account's balance.
    async fn credit(&self, id: AccountId, amount: Cents) -> Result<(), StoreError>;

    /// Atomically subtracts `amount` from one account's balance.
    ///
    /// There is no floor: the row accepts whatever balance results.
    async fn debit(&self, id: AccountId, amount: Cents) -> Result<(), StoreError>;

    /// Appends a record to the transaction log, assigning its id.
    async fn append_transaction(&self, new: NewTransaction) -> Result<Transaction, StoreError>;

    /// Looks up a logged transaction by id.
    async fn transaction(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError>;

    /// Overwrites the status field of a logged transaction.
    async fn set_transaction_status(
        &self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Result<(), StoreError>;

    /// Returns all transactions whose source is `source`, in ascending id
    /// order.
    async fn transactions_from(&self, source: AccountId) -> Result<Vec<Transaction>, StoreError>;

    /// Resolves an API key to the account that owns it.
    async fn account_id_for_key(&self, api_key: &str) -> Result<Option<AccountId>, StoreError>;
}
