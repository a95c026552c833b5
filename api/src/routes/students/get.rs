use axum::{
    extract::{Path, State},
    response::Response,
};
use services::student::StudentService;
use util::state::AppState;

use crate::response::ok;
use crate::routes::common::service_error;

/// GET /api/students/{student_id}/summary
///
/// Per-course sessions held and attended, plus overall rate.
pub async fn summary(State(state): State<AppState>, Path(student_id): Path<i64>) -> Response {
    match StudentService::summary(state.db(), student_id).await {
        Ok(summary) => ok(summary, "Student summary retrieved"),
        Err(e) => service_error(e),
    }
}
