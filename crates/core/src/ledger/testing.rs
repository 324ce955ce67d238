//! Hand-rolled in-memory store double for engine tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use centavo_shared::types::{AccountId, Cents, TransactionId};

use super::types::{NewTransaction, Transaction, TransactionStatus};
use crate::store::{LedgerStore, StoreError};

/// A pair of locked maps plus a journal of every store call, so tests can
/// assert both the end state and the order operations were issued in.
pub(crate) struct FakeStore {
    balances: Mutex<HashMap<AccountId, Cents>>,
    keys: Mutex<HashMap<String, AccountId>>,
    transactions: Mutex<Vec<Transaction>>,
    next_transaction_id: AtomicI64,
    journal: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            keys: Mutex::new(HashMap::new()),
            transactions: Mutex::new(Vec::new()),
            next_transaction_id: AtomicI64::new(1),
            journal: Mutex::new(Vec::new()),
        }
    }

    /// Builds a store holding the given `(account id, balance)` pairs.
    pub fn with_balances(balances: &[(i64, i64)]) -> Self {
        let store = Self::new();
        {
            let mut map = store.balances.lock().unwrap();
            for &(id, balance) in balances {
                map.insert(AccountId::new(id), Cents::new(balance));
            }
        }
        store
    }

    /// Registers a credential for an existing account.
    pub fn with_key(self, api_key: &str, id: i64) -> Self {
        self.keys
            .lock()
            .unwrap()
            .insert(api_key.to_string(), AccountId::new(id));
        self
    }

    /// Seeds a logged transaction without touching the journal.
    pub fn insert_transaction(
        &self,
        source: i64,
        destination: i64,
        amount: i64,
        status: TransactionStatus,
    ) -> TransactionId {
        let id = TransactionId::new(self.next_transaction_id.fetch_add(1, Ordering::Relaxed));
        self.transactions.lock().unwrap().push(Transaction {
            id,
            source: AccountId::new(source),
            destination: AccountId::new(destination),
            amount: Cents::new(amount),
            timestamp: Utc::now(),
            status,
        });
        id
    }

    pub fn balance(&self, id: i64) -> Cents {
        *self
            .balances
            .lock()
            .unwrap()
            .get(&AccountId::new(id))
            .expect("account seeded in test")
    }

    pub fn logged_transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl LedgerStore for FakeStore {
    async fn balance_of(&self, id: AccountId) -> Result<Cents, StoreError> {
        self.record(format!("balance_of {id}"));
        self.balances
            .lock()
            .unwrap()
            .get(&id)
            .copied()
            .ok_or(StoreError::AccountNotFound(id))
    }

    async fn credit(&self, id: AccountId, amount: Cents) -> Result<(), StoreError> {
        self.record(format!("credit {id} {amount}"));
        match self.balances.lock().unwrap().get_mut(&id) {
            Some(balance) => {
                *balance += amount;
                Ok(())
            }
            None => Err(StoreError::AccountNotFound(id)),
        }
    }

    async fn debit(&self, id: AccountId, amount: Cents) -> Result<(), StoreError> {
        self.record(format!("debit {id} {amount}"));
        match self.balances.lock().unwrap().get_mut(&id) {
            Some(balance) => {
                *balance -= amount;
                Ok(())
            }
            None => Err(StoreError::AccountNotFound(id)),
        }
    }

    async fn append_transaction(&self, new: NewTransaction) -> Result<Transaction, StoreError> {
        self.record("append_transaction".to_string());
        let id = TransactionId::new(self.next_transaction_id.fetch_add(1, Ordering::Relaxed));
        let tx = Transaction {
            id,
            source: new.source,
            destination: new.destination,
            amount: new.amount,
            timestamp: new.timestamp,
            status: new.status,
        };
        self.transactions.lock().unwrap().push(tx.clone());
        Ok(tx)
    }

    async fn transaction(&self, id: TransactionId) -> Result<Option<Transaction>, StoreError> {
        self.record(format!("transaction {id}"));
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|tx| tx.id == id)
            .cloned())
    }

    async fn set_transaction_status(
        &self,
        id: TransactionId,
        status: TransactionStatus,
    ) -> Result<(), StoreError> {
        self.record(format!("set_status {id} {status:?}"));
        if let Some(tx) = self
            .transactions
            .lock()
            .unwrap()
            .iter_mut()
            .find(|tx| tx.id == id)
        {
            tx.status = status;
        }
        Ok(())
    }

    async fn transactions_from(&self, source: AccountId) -> Result<Vec<Transaction>, StoreError> {
        self.record(format!("transactions_from {source}"));
        let mut rows: Vec<Transaction> = self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|tx| tx.source == source)
            .cloned()
            .collect();
        rows.sort_by_key(|tx| tx.id);
        Ok(rows)
    }

    async fn account_id_for_key(&self, api_key: &str) -> Result<Option<AccountId>, StoreError> {
        self.record(format!("account_id_for_key {api_key}"));
        Ok(self.keys.lock().unwrap().get(api_key).copied())
    }
}
