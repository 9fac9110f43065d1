//! Unified error system for the cadastre ledger core
//!
//! Every operation in the core fails with exactly one of these variants and
//! leaves no partial ledger state behind. Retry policy belongs to the
//! invoking runtime; there is no local recovery here.

use serde::{Deserialize, Serialize};

/// Unified error type for all ledger core operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum LedgerError {
    /// Malformed or out-of-range input, rejected before any ledger access
    #[error("Validation failed: {message}")]
    Validation {
        /// Description of the violated input constraint
        message: String,
    },

    /// The targeted asset record or transfer agreement does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// Creation collided with an existing record
    #[error("Already exists: {message}")]
    AlreadyExists {
        /// Description of the colliding record
        message: String,
    },

    /// Transfer-agreement mismatch or duplicate proposal
    #[error("Conflict: {message}")]
    Conflict {
        /// Description of the conflicting state
        message: String,
    },

    /// Organization-boundary violation; always fatal to the operation
    #[error("Authorization failed: {message}")]
    Authorization {
        /// Description of the denied access
        message: String,
    },

    /// Canonical encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the codec failure
        message: String,
    },

    /// The external partition store failed; propagated, never recovered
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the store failure
        message: String,
    },
}

impl LedgerError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an authorization error
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Standard Result type for ledger core operations
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LedgerError::validation("area must be positive");
        assert!(matches!(err, LedgerError::Validation { .. }));
        assert_eq!(err.to_string(), "Validation failed: area must be positive");
    }

    #[test]
    fn test_error_display_per_variant() {
        let cases = [
            (LedgerError::not_found("asset A1"), "Not found: asset A1"),
            (
                LedgerError::already_exists("asset A1"),
                "Already exists: asset A1",
            ),
            (
                LedgerError::conflict("agreement buyer mismatch"),
                "Conflict: agreement buyer mismatch",
            ),
            (
                LedgerError::authorization("org mismatch"),
                "Authorization failed: org mismatch",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_result_type() {
        fn exists() -> Result<bool> {
            Ok(true)
        }

        assert!(exists().unwrap());
    }
}
