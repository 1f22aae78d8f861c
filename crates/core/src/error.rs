//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants are expected business outcomes, not faults. Each carries the
/// identifier the operation referred to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record exists with the given identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record with the given identifier is already present.
    #[error("already exists: {0}")]
    AlreadyExists(String),
}

impl DomainError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists(id.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
