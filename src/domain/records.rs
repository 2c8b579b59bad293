//! User record service: validation, store dispatch, and result mapping.
//!
//! This is the only component with decision logic. Each operation parses its
//! raw string inputs, issues exactly one statement through the store port,
//! and surfaces failures as [`DirectoryError`] values. Validation always runs
//! before the port is touched, so malformed input never costs a connection.

use std::sync::Arc;

use tracing::debug;

use crate::domain::error::DirectoryError;
use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::user::{User, UserDraft, UserId};

fn map_store_error(error: UserStoreError) -> DirectoryError {
    match error {
        UserStoreError::Connection { message } => DirectoryError::Connection { message },
        UserStoreError::Execution { message } => DirectoryError::Store { message },
    }
}

/// Stateless CRUD service over the user store port.
///
/// Operations are independent; the service holds no user data beyond the
/// duration of a single call.
#[derive(Clone)]
pub struct UserRecordService {
    store: Arc<dyn UserStore>,
}

impl UserRecordService {
    /// Create a service backed by the given store adapter.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// List every user. An empty directory is an ordinary result.
    pub async fn list(&self) -> Result<Vec<User>, DirectoryError> {
        self.store.list().await.map_err(map_store_error)
    }

    /// Create a user from raw form fields.
    pub async fn create(&self, name: &str, email: &str) -> Result<(), DirectoryError> {
        let draft = UserDraft::try_from_strings(name, email)?;
        self.store.insert(&draft).await.map_err(map_store_error)?;
        debug!(name = draft.name(), "user created");
        Ok(())
    }

    /// Fetch one user by its raw id segment.
    ///
    /// `Ok(None)` means the id parsed but matched no row; this is an expected
    /// outcome, not a failure.
    pub async fn read_one(&self, id: &str) -> Result<Option<User>, DirectoryError> {
        let id = UserId::parse(id)?;
        self.store.find_by_id(id).await.map_err(map_store_error)
    }

    /// Overwrite name and email for the given raw id segment.
    ///
    /// Reports success even when the id matched no row; callers cannot
    /// distinguish "updated nothing" from "updated one row".
    pub async fn update(&self, id: &str, name: &str, email: &str) -> Result<(), DirectoryError> {
        let id = UserId::parse(id)?;
        let draft = UserDraft::try_from_strings(name, email)?;
        self.store.update(id, &draft).await.map_err(map_store_error)
    }

    /// Delete the row with the given raw id segment.
    ///
    /// Like [`UserRecordService::update`], an absent id still succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), DirectoryError> {
        let id = UserId::parse(id)?;
        self.store.delete(id).await.map_err(map_store_error)
    }
}
