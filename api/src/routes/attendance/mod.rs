use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/feed", get(get::feed))
}
