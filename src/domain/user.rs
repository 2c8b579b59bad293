//! User record types and field validation.

use std::fmt;

/// Validation errors raised while parsing raw request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The id path segment did not parse as an integer.
    #[error("user id must be an integer")]
    InvalidId,
    /// The name form field was missing or blank.
    #[error("name must not be empty")]
    EmptyName,
    /// The email form field was missing or blank.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Surrogate key assigned by the store.
///
/// Ids only ever originate from the store; request input is parsed through
/// [`UserId::parse`] so handlers never pass raw strings downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a store-assigned id.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse a raw path segment into an id.
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Access the underlying integer.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated name/email pair for create and update operations.
///
/// ## Invariants
/// - `name` and `email` are non-empty once trimmed of whitespace.
///
/// Content is otherwise stored verbatim; the store adapter binds both values
/// as statement parameters, never as SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Fallible constructor enforcing required-field presence.
    pub fn try_from_strings(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self { name, email })
    }

    /// Name exactly as submitted.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email exactly as submitted.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Directory user as read from the store.
///
/// ## Invariants
/// - `id` was assigned by the store and is immutable.
/// - `name` and `email` were validated non-empty before they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a [`User`] from store-sourced components.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Stored name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Stored email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
