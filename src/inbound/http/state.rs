//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the record service and remain testable without a live store.

use crate::domain::records::UserRecordService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub records: UserRecordService,
}

impl HttpState {
    /// Construct state around a record service.
    pub fn new(records: UserRecordService) -> Self {
        Self { records }
    }
}
