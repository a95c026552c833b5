//! Helpers shared by the route handlers.

use axum::{http::StatusCode, response::Response};
use services::{ServiceError, check_in::CheckInError};
use validator::ValidationErrors;

use crate::response::error_response;

/// Joins the messages of all field errors into one line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Maps a failed backend query to a response. Database details stay in the log.
pub fn service_error(err: ServiceError) -> Response {
    match err {
        ServiceError::NotFound(what) => {
            error_response(StatusCode::NOT_FOUND, format!("{} not found", capitalize(&what)))
        }
        ServiceError::Db(e) => {
            tracing::error!(error = %e, "backend query failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load data from the backend",
            )
        }
    }
}

pub fn check_in_error(err: CheckInError) -> Response {
    tracing::info!(reason = %err, "check-in rejected");
    error_response(StatusCode::BAD_REQUEST, capitalize(&err.to_string()))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
