use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use services::attendance_feed::AttendanceFeedService;
use util::{config, state::AppState};

use crate::response::ok;
use crate::routes::common::service_error;

#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/attendance/feed?page=&per_page=
///
/// Backend check-ins, newest first. `page` starts at 1; `per_page` defaults
/// to `FEED_PAGE_SIZE` and is capped at 100.
pub async fn feed(State(state): State<AppState>, Query(q): Query<FeedQuery>) -> Response {
    let page = q.page.unwrap_or(1);
    let per_page = q.per_page.unwrap_or_else(config::feed_page_size).clamp(1, 100);

    match AttendanceFeedService::page(state.db(), page, per_page, config::default_class_size()).await {
        Ok(feed) => ok(feed, "Attendance feed retrieved"),
        Err(e) => service_error(e),
    }
}
