use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

pub fn student_routes() -> Router<AppState> {
    Router::new().route("/{student_id}/summary", get(get::summary))
}
