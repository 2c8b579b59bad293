//! Server-rendered user directory backed by a relational store.
//!
//! The domain layer owns all decision logic: input validation, statement
//! dispatch through the store port, and the failure taxonomy. Inbound HTTP
//! adapters render domain values to HTML; outbound persistence adapters talk
//! to PostgreSQL through Diesel.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
