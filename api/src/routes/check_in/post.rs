use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::check_in::{CheckInPolicy, CheckInService, Supplied};
use util::state::AppState;
use validator::Validate;

use super::common::{CheckInBody, CheckInMethod};
use crate::response::{ApiResponse, error_response};
use crate::routes::common::{check_in_error, format_validation_errors};

/// POST /api/check-in
///
/// Verifies the supplied reading and, on success, marks the student present
/// and posts a success notification.
///
/// - `201 Created` with `{ record, notification }`
/// - `400 Bad Request` when validation, capture or verification fails; the
///   store is left unchanged
pub async fn check_in(
    State(state): State<AppState>,
    body: Result<Json<CheckInBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid check-in: {}", rejection.body_text()),
            );
        }
    };
    if let Err(e) = body.request.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let policy = CheckInPolicy::from_config();
    let store = state.store();
    let result = match body.method {
        CheckInMethod::QrCode => {
            CheckInService::check_in(store, &body.request, &Supplied(body.qr), &policy)
        }
        CheckInMethod::FaceRecognition => {
            CheckInService::check_in(store, &body.request, &Supplied(body.face), &policy)
        }
        CheckInMethod::Gps => {
            CheckInService::check_in(store, &body.request, &Supplied(body.gps), &policy)
        }
    };

    match result {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(receipt, "Attendance marked")),
        )
            .into_response(),
        Err(e) => check_in_error(e),
    }
}
