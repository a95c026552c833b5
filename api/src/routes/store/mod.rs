//! `/api/store`: the process-wide attendance store.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`get::snapshot`] |
//! | POST | `/dispatch` | [`post::dispatch`] |
//! | GET | `/records` | [`get::records`] |
//! | GET | `/summary` | [`get::summary`] |
//! | GET | `/notifications` | [`get::notifications`] |
//! | GET / POST / DELETE | `/session` | [`get::session`], [`post::start_session`], [`delete::end_session`] |

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::snapshot))
        .route("/dispatch", post(post::dispatch))
        .route("/records", get(get::records))
        .route("/summary", get(get::summary))
        .route("/notifications", get(get::notifications))
        .route(
            "/session",
            get(get::session)
                .post(post::start_session)
                .delete(delete::end_session),
        )
}
