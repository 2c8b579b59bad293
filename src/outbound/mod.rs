//! Outbound adapters owned by the application.

pub mod persistence;
