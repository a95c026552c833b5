use axum::{
    extract::{Path, State},
    response::Response,
};
use services::profile::ProfileService;
use util::state::AppState;

use crate::response::ok;
use crate::routes::common::service_error;

/// GET /api/profiles/{profile_id}
pub async fn profile(State(state): State<AppState>, Path(profile_id): Path<i64>) -> Response {
    match ProfileService::find(state.db(), profile_id).await {
        Ok(profile) => ok(profile, "Profile retrieved"),
        Err(e) => service_error(e),
    }
}
