//! Domain-specific errors for the teller.
//!
//! Contains error variants for the business-rule rejections:
//! - Account lookups (not found) and identifier allocation (exhausted)
//! - Balance mutations (invalid amount, insufficient funds)
//! - Command validation at the front end (invalid command)
//!
//! These errors represent rejected operations rather than technical
//! errors like I/O or parsing issues. A rejected operation never
//! mutates any account.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Account not found.")]
    AccountNotFound,
    #[error("No account numbers left to issue.")]
    IdentifiersExhausted,
    #[error("Insufficient balance or rules violated.")]
    InsufficientFunds,
    #[error("Invalid amount.")]
    InvalidAmount,
    #[error("Invalid command: {0}")]
    InvalidCommand(&'static str),
}
