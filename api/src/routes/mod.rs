//! HTTP routes under `/api`.
//!
//! - `/health` liveness probe
//! - `/store` the in-process attendance store: snapshot, dispatch, filtered
//!   reads and the lecturer session
//! - `/check-in` student check-in by QR code, face match or GPS
//! - `/attendance` live feed of backend check-ins
//! - `/lecturers`, `/students`, `/profiles` backend read models and exports

use axum::Router;
use util::state::AppState;

use crate::routes::{
    attendance::attendance_routes, check_in::check_in_routes, health::health_routes,
    lecturers::lecturer_routes, profiles::profile_routes, store::store_routes,
    students::student_routes,
};

pub mod attendance;
pub mod check_in;
pub mod common;
pub mod health;
pub mod lecturers;
pub mod profiles;
pub mod store;
pub mod students;

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/store", store_routes())
        .nest("/check-in", check_in_routes())
        .nest("/attendance", attendance_routes())
        .nest("/lecturers", lecturer_routes())
        .nest("/students", student_routes())
        .nest("/profiles", profile_routes())
        .with_state(app_state)
}
