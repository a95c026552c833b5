use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

pub fn lecturer_routes() -> Router<AppState> {
    Router::new()
        .route("/{lecturer_id}/overview", get(get::overview))
        .route("/{lecturer_id}/report", get(get::report))
        .route("/{lecturer_id}/students.csv", get(get::students_csv))
}
