//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// identity conflicts). "Not found" and empty query results are represented as
/// `Option`/empty collections, never as errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank name, out-of-range rating).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank product id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An insert targeted an identifier that is already taken.
    #[error("duplicate id: {0}")]
    DuplicateId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }
}
