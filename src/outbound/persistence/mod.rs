//! PostgreSQL persistence adapters for the user store.

mod diesel_user_store;
mod models;
pub mod provisioner;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use provisioner::{ConnectionProvisioner, ProvisionError, StoreConfig};
