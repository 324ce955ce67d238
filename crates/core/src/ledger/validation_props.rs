//! Property-based tests for transfer preconditions.

use proptest::prelude::*;

use centavo_shared::types::Cents;

use super::error::LedgerError;
use super::validation::{check_amount, check_funds};

/// Strategy to generate a strictly positive amount.
fn positive_amount() -> impl Strategy<Value = Cents> {
    (1i64..1_000_000_000i64).prop_map(Cents::new)
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Cents> {
    (-1_000_000_000i64..=0i64).prop_map(Cents::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any non-positive amount is rejected, and the check needs no balance,
    /// so a request failing here cannot have touched the store.
    #[test]
    fn prop_non_positive_amount_rejected(amount in non_positive_amount()) {
        let result = check_amount(amount);
        prop_assert!(
            matches!(result, Err(LedgerError::InvalidAmount)),
            "non-positive amount should be rejected, got: {:?}",
            result
        );
    }

    /// Any strictly positive amount passes the amount check.
    #[test]
    fn prop_positive_amount_accepted(amount in positive_amount()) {
        prop_assert!(check_amount(amount).is_ok());
    }

    /// Any balance short of the requested amount fails the funds check.
    #[test]
    fn prop_shortfall_rejected(
        amount in positive_amount(),
        shortfall in 1i64..1_000_000i64,
    ) {
        let balance = amount - Cents::new(shortfall);
        let result = check_funds(balance, amount);
        prop_assert!(
            matches!(result, Err(LedgerError::InsufficientFunds)),
            "short balance should be rejected, got: {:?}",
            result
        );
    }

    /// Any balance at or above the requested amount passes the funds check.
    #[test]
    fn prop_covered_amount_accepted(
        amount in positive_amount(),
        headroom in 0i64..1_000_000i64,
    ) {
        let balance = amount + Cents::new(headroom);
        prop_assert!(check_funds(balance, amount).is_ok());
    }
}
