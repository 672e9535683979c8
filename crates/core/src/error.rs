//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic, recoverable condition that callers are
/// expected to match on. Nothing in here is process-fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was rejected (blank or already taken).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A lookup found nothing. Carries a description of what was searched.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
