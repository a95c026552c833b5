use axum::{extract::State, response::Response};
use store::{Action, StoreEvent};
use util::state::AppState;

use crate::response::ok;

/// DELETE /api/store/session
///
/// Ends the session. Ending when none is active is not an error; `data` is
/// then `null`.
pub async fn end_session(State(state): State<AppState>) -> Response {
    let event = state.store().dispatch(Action::EndSession);
    state.stop_pulse();

    let ended = match event {
        StoreEvent::SessionEnded { ended } => ended,
        _ => None,
    };
    let message = if ended.is_some() {
        "Session ended"
    } else {
        "No active session"
    };
    ok(ended, message)
}
