//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`DirectoryError`] transport agnostic while letting handlers bubble
//! failures with `?` into consistent status codes and HTML message pages.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::error::DirectoryError;
use crate::inbound::http::pages;

/// Convenient result alias for HTTP handlers.
pub type PageResult = Result<HttpResponse, DirectoryError>;

fn status_for(error: &DirectoryError) -> StatusCode {
    match error {
        DirectoryError::Validation(_) => StatusCode::BAD_REQUEST,
        DirectoryError::Connection { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DirectoryError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn user_facing_message(error: &DirectoryError) -> String {
    match error {
        DirectoryError::Validation(err) => err.to_string(),
        // Store detail goes to the log, never into the page.
        DirectoryError::Connection { .. } => "The directory is temporarily unavailable.".into(),
        DirectoryError::Store { .. } => "The directory could not complete the request.".into(),
    }
}

impl ResponseError for DirectoryError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed against the store");
        }
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(pages::message_page(&user_facing_message(self)))
    }
}
