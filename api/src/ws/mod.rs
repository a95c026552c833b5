use axum::{Router, routing::get};
use util::state::AppState;

pub mod store;

/// WebSocket routes under `/ws`.
pub fn ws_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/store", get(store::store_ws_handler))
        .with_state(app_state)
}
