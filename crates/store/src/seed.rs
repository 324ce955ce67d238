//! Demo account fixtures.

use tracing::info;

use centavo_core::ledger::Account;
use centavo_shared::types::Cents;

use crate::memory::MemoryStore;

/// Username, opening balance in cents, and API key for each demo account.
pub const SEED_ACCOUNTS: [(&str, i64, &str); 3] = [
    ("alice", 10_000, "secret_alice_123"),
    ("bob", 5_000, "secret_bob_456"),
    ("mallory", 1_000, "secret_mal_789"),
];

/// Loads the demo accounts into the store.
///
/// Ids are assigned in declaration order, so alice is always account 1.
pub fn seed_accounts(store: &MemoryStore) -> Vec<Account> {
    SEED_ACCOUNTS
        .iter()
        .map(|&(username, balance, api_key)| {
            let account = store.insert_account(username, Cents::new(balance), api_key);
            info!(
                account_id = %account.id,
                username = %account.username,
                balance = %account.balance,
                "seeded account"
            );
            account
        })
        .collect()
}
