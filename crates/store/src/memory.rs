//! Concurrent in-memory account store and transaction log.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use centavo_core::ledger::{Account, NewTransaction, Transaction, TransactionStatus};
use centavo_core::store::{LedgerStore, StoreError};
use centavo_shared::types::{AccountId, Cents, TransactionId};

/// Concurrent map-backed implementation of [`LedgerStore`].
///
/// Each method locks exactly one map entry and commits on its own. There
/// is no multi-entry transaction; a sequence of calls that should stand or
/// fall together does neither.
pub struct MemoryStore {
    accounts: DashMap<AccountId, Account>,
    transactions: DashMap<TransactionId, Transaction>,
    keys: DashMap<String, AccountId>,
    next_account_id: AtomicI64,
    next_transaction_id: AtomicI64,
}

impl MemoryStore {
    /// Creates an empty store. Account and transaction ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            transactions: DashMap::new(),
            keys: DashMap::new(),
            next_account_id: AtomicI64::new(1),
            next_transaction_id: AtomicI64::new(1),
        }
    }

    /// Inserts a new account with the given opening balance and API key.
    pub fn insert_account(&self, username: &str, balance: Cents, api_key: &str) -> Account {
        let id = AccountId::new(self.next_account_id.fetch_add(1, Ordering::SeqCst));
        let account = Account {
            id,
            username: username.to_string(),
            balance,
            api_key: api_key.to_string(),
        };
        self.accounts.insert(id, account.clone());
        self.keys.insert(api_key.to_string(), id);
        account
    }

    /// Reads a full account row.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).map(|entry| entry.value().clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn balance_of(&self, id: AccountId) -> Result<Cents, StoreError> {
        self.accounts
            .get(&id)
            .map(|entry| entry.balance)
            .ok_or(StoreError::AccountNotFound(id))
    }

    async fn credit(&self, id: AccountId, amount: Cents) -> Result<(), StoreError> {
        match self.accounts.get_mut(&id) {
            Some(mut entry) => {
                entry.balance += amount;
                Ok(())
            }
            None => Err(StoreError::AccountNotFound(id)),
        }
    }

    async fn debit(&self, id: AccountId, amount: Cents) -> Result<(), StoreError> {
        match self.accounts.get_mut(&id) {
            Some(mut entry) => {
                entry.balance -= amount;
                Ok(())
            }
            None => Err(StoreError::AccountNotFound(id)),
        }
    }

    async fn append_transaction(&self, new: NewTransaction) -> Result<Transaction, StoreError> {
        let id = TransactionId::new(self.next_transaction_id.fetch_add(1, Ordering::SeqCst));
        let transaction = Transaction {
            id,
            source: new.source,
            destination: new.destination,
            amount: new.amount,
            timestamp: new.timestamp,
            status: new.status,
        };
        self.transactions.insert(id, transaction.clone());
        Ok(transaction)
    }

    async fn transaction(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        Ok(self.transactions.get(&id).map(|entry| entry.value().clone()))
    }

    async fn set_transaction_status(
        &self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Result<(), StoreError> {
        // Matches zero or one rows; a miss is not an error.
        if let Some(mut entry) = self.transactions.get_mut(&id) {
            entry.status = status;
        }
        Ok(())
    }

    async fn transactions_from(&self, source: AccountId) -> Result<Vec<Transaction>, StoreError> {
        let mut rows: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|entry| entry.source == source)
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|tx| tx.id);
        Ok(rows)
    }

    async fn account_id_for_key(&self, api_key: &str) -> Result<Option<AccountId>, StoreError> {
        Ok(self.keys.get(api_key).map(|entry| *entry.value()))
    }
}
