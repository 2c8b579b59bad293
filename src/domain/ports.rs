//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::user::{User, UserDraft, UserId};

/// Persistence errors raised by user store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established or was lost.
    #[error("user store connection failed: {message}")]
    Connection { message: String },
    /// Statement failed during execution.
    #[error("user store statement failed: {message}")]
    Execution { message: String },
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create an execution error with the given message.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }
}

/// Store access required by the user record service.
///
/// Each method issues exactly one statement; adapters bind all user-supplied
/// values as statement parameters.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch every user row in store-default order.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Insert a new user record.
    async fn insert(&self, draft: &UserDraft) -> Result<(), UserStoreError>;

    /// Fetch a user by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Overwrite name and email for the given id.
    ///
    /// Matching zero rows is not an error.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<(), UserStoreError>;

    /// Remove the row with the given id, if any.
    async fn delete(&self, id: UserId) -> Result<(), UserStoreError>;
}
