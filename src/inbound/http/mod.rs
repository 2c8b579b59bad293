//! HTTP inbound adapter rendering server-side HTML pages.

pub mod error;
pub mod pages;
pub mod state;
pub mod users;

pub use error::PageResult;
