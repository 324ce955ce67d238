//! Peer-to-peer transfer, refund, and statement logic.
//!
//! This module implements the core ledger functionality:
//! - Domain types for accounts and the transaction log
//! - Precondition validation for transfer requests
//! - Transfer engine (balance check, compliance hold, two-step move)
//! - Refund engine (sender-gated reversal)
//! - Statement reporter (source-filtered history)
//! - Error types for ledger operations

pub mod error;
pub mod refund;
pub mod statement;
pub mod transfer;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use refund::RefundEngine;
pub use statement::StatementReporter;
pub use transfer::TransferEngine;
pub use types::{
    Account, NewTransaction, RefundReceipt, StatementRow, Transaction, TransactionStatus,
    TransferReceipt,
};
