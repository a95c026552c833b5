use axum::{Router, routing::post};
use util::state::AppState;

pub mod common;
pub mod post;

pub fn check_in_routes() -> Router<AppState> {
    Router::new().route("/", post(post::check_in))
}
