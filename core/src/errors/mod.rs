//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::AuthError;

use thiserror::Error;

/// Core domain errors
///
/// Every variant is terminal for the request that produced it; the service
/// layer never retries.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A required field is missing, empty or malformed
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The caller could not be authenticated
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A key-value store operation failed
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// The notification provider rejected or failed to send a message
    #[error("Delivery error: {message}")]
    Delivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::Auth(auth) => auth.error_code(),
            DomainError::Storage { .. } => "STORAGE_ERROR",
            DomainError::Delivery { .. } => "DELIVERY_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
