//! Unified error types for the client store.
//!
//! This module provides the canonical error type for all store operations
//! and presents a consistent interface to both consumers (SSR and JSON API).

use thiserror::Error;

/// All client store errors.
///
/// Each variant corresponds to one row of the error taxonomy: `NotFound`
/// maps to a 404-equivalent, `Validation` to a 400-equivalent, and the
/// persistence variants to a 500-equivalent. Storage *read* failures never
/// appear here — the loader is fail-open and yields an empty collection.
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup failed; carries the requested id exactly as the caller sent it.
    #[error("client not found: {id}")]
    NotFound {
        /// The raw requested id, echoed back to the caller.
        id: String,
    },

    /// One or more field constraints violated, in declaration order.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Storage medium unwritable. Never swallowed, or data loss would be
    /// silent.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be encoded for persistence.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for client store operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Construct a not-found error for a caller-supplied id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// The accumulated violation messages, if this is a validation error.
    pub fn validation_details(&self) -> Option<&[String]> {
        match self {
            Error::Validation(details) => Some(details),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
