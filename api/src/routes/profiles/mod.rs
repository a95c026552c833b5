use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/{profile_id}", get(get::profile))
}
