//! Precondition checks for transfer requests.
//!
//! Both checks are pure. The amount check runs before any store access; the
//! funds check compares a balance snapshot that is only as fresh as the read
//! that produced it, and nothing holds the balance steady afterwards.

use centavo_shared::types::Cents;

use super::error::LedgerError;

/// Rejects zero and negative transfer amounts.
///
/// # Errors
///
/// Returns `InvalidAmount` if `amount <= 0`.
pub const fn check_amount(amount: Cents) -> Result<(), LedgerError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount)
    }
}

/// Compares a balance snapshot against the requested amount.
///
/// # Errors
///
/// Returns `InsufficientFunds` if `balance < amount`.
pub fn check_funds(balance: Cents, amount: Cents) -> Result<(), LedgerError> {
    if balance < amount {
        Err(LedgerError::InsufficientFunds)
    } else {
        Ok(())
    }
}
