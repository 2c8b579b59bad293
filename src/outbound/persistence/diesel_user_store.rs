//! PostgreSQL-backed `UserStore` implementation using Diesel.
//!
//! Each operation acquires one transient connection from the provisioner,
//! issues a single parameterized statement, and drops the connection when the
//! call returns. User-supplied values only ever travel as bind parameters.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::user::{User, UserDraft, UserId};

use super::models::{NewUserRow, UserChangeset, UserRow};
use super::provisioner::{ConnectionProvisioner, ProvisionError};
use super::schema::users;

/// Diesel-backed implementation of the `UserStore` port.
#[derive(Clone)]
pub struct DieselUserStore {
    provisioner: ConnectionProvisioner,
}

impl DieselUserStore {
    /// Create a store adapter over the given provisioner.
    pub fn new(provisioner: ConnectionProvisioner) -> Self {
        Self { provisioner }
    }
}

fn map_provision_error(error: ProvisionError) -> UserStoreError {
    match error {
        ProvisionError::Connect { message } => UserStoreError::connection(message),
    }
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> UserStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserStoreError::connection("database connection closed")
        }
        DieselError::DatabaseError(_, info) => UserStoreError::execution(info.message().to_owned()),
        other => UserStoreError::execution(other.to_string()),
    }
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn list(&self) -> Result<Vec<User>, UserStoreError> {
        let mut conn = self
            .provisioner
            .acquire()
            .await
            .map_err(map_provision_error)?;
        let rows = users::table
            .select(UserRow::as_select())
            .load::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<(), UserStoreError> {
        let mut conn = self
            .provisioner
            .acquire()
            .await
            .map_err(map_provision_error)?;
        diesel::insert_into(users::table)
            .values(NewUserRow {
                name: draft.name(),
                email: draft.email(),
            })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let mut conn = self
            .provisioner
            .acquire()
            .await
            .map_err(map_provision_error)?;
        let row = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(User::from))
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<(), UserStoreError> {
        let mut conn = self
            .provisioner
            .acquire()
            .await
            .map_err(map_provision_error)?;
        // Zero matched rows is deliberately indistinguishable from one.
        diesel::update(users::table.find(id.get()))
            .set(UserChangeset {
                name: draft.name(),
                email: draft.email(),
            })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserStoreError> {
        let mut conn = self
            .provisioner
            .acquire()
            .await
            .map_err(map_provision_error)?;
        diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
