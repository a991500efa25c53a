//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// A missing storage key is never an error (repositories treat it as an
/// empty collection); a malformed stored value is, and is fatal for that
/// read. Business rules are enforced at the service layer only.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Stored value could not be decoded: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },
}

impl DomainError {
    /// Shorthand for a storage-layer failure
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for an input validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a business rule violation
    pub fn business_rule(message: impl Into<String>) -> Self {
        DomainError::BusinessRule {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
