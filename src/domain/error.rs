//! Domain-level failure taxonomy.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and HTML error pages; the domain never sees either.

use crate::domain::user::UserValidationError;

/// Failures surfaced by the user record service.
///
/// A missing row is deliberately absent from this taxonomy: `read_one`
/// returns `Ok(None)` so callers can treat not-found as an ordinary outcome
/// rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// Malformed or missing input, detected before any store access.
    #[error(transparent)]
    Validation(#[from] UserValidationError),

    /// The store could not be reached or refused authentication.
    #[error("store connection failed: {message}")]
    Connection { message: String },

    /// The store rejected or failed to execute a well-formed statement.
    #[error("store statement failed: {message}")]
    Store { message: String },
}

impl DirectoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a store error with the given message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
