//! Transport-agnostic domain types and the user record service.

pub mod error;
pub mod ports;
pub mod records;
pub mod user;

pub use error::DirectoryError;
pub use records::UserRecordService;
pub use user::{User, UserDraft, UserId, UserValidationError};
