use std::time::Duration;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use store::{Action, StartSession, StoreEvent};
use util::{config, state::AppState};
use validator::Validate;

use super::common::{StartSessionReq, session_qr_code};
use crate::response::{ApiResponse, error_response, ok};
use crate::routes::common::format_validation_errors;

/// POST /api/store/dispatch
///
/// Applies a raw action and returns the resulting event.
///
/// ```json
/// { "type": "ADD_NOTIFICATION", "payload": { "message": "Room changed", "type": "warning" } }
/// ```
///
/// - `200 OK` with the `StoreEvent`
/// - `400 Bad Request` for an unknown `type` or a malformed payload
pub async fn dispatch(
    State(state): State<AppState>,
    body: Result<Json<Action>, JsonRejection>,
) -> Response {
    let Json(action) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid action: {}", rejection.body_text()),
            );
        }
    };

    let starts_or_ends = matches!(action, Action::StartSession(_) | Action::EndSession);
    let event = state.store().dispatch(action);
    if starts_or_ends {
        state.restart_pulse(pulse_period());
    }

    ok(event, "Action applied")
}

/// POST /api/store/session
///
/// Starts (or replaces) the lecturer session with a fresh QR code.
///
/// ```json
/// { "course_id": "CS301", "course_name": "Computer Networks" }
/// ```
///
/// - `201 Created` with the session this request started
/// - `400 Bad Request` on a malformed body or validation failure
pub async fn start_session(
    State(state): State<AppState>,
    body: Result<Json<StartSessionReq>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid session: {}", rejection.body_text()),
            );
        }
    };
    if let Err(e) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let qr_code = session_qr_code(&req.course_id, Utc::now());
    let event = state.store().dispatch(Action::StartSession(StartSession {
        course_id: req.course_id,
        course_name: req.course_name,
        qr_code,
    }));
    state.restart_pulse(pulse_period());

    let StoreEvent::SessionStarted { session, .. } = event else {
        unreachable!("START_SESSION applied as {event:?}");
    };
    tracing::info!(qr_code = %session.qr_code, course_id = %session.course_id, "session started");
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(session, "Session started")),
    )
        .into_response()
}

fn pulse_period() -> Duration {
    Duration::from_secs(config::session_pulse_seconds())
}
