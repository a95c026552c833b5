pub mod response;
pub mod routes;
pub mod ws;

use axum::Router;
use util::state::AppState;

/// `/api` and `/ws` mounted on one router, without server-level layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::routes(state.clone()))
        .nest("/ws", ws::ws_routes(state))
}
