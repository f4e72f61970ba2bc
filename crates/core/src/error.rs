//! Errors raised by the ledger's domain rules.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A rule of the books was broken.
///
/// Only failures that depend on the data itself live here. A record that
/// fails to save or a bad token is reported by the crate that owns the store
/// or the transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User-entered data was rejected: a blank name, a malformed amount, a
    /// date in the wrong format.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The change would leave the chart of accounts or a diary entry in a
    /// state the books do not allow.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Names the kind of record that was looked up.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Duplicate account number, or an account that still has children.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A total no longer fits in the cents range of [`Money`](crate::Money).
    #[error("amount out of range: {0}")]
    OutOfRange(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound(what)
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }
}
