use axum::{Json, Router, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::response::ApiResponse;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// ```json
/// { "success": true, "data": "OK", "message": "Health check passed" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
