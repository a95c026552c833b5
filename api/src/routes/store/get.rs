use axum::{
    extract::{Query, State},
    response::Response,
};
use store::AttendanceSummary;
use util::{config, state::AppState};

use super::common::{NotificationQuery, RecordFilter, SnapshotResponse, SummaryQuery};
use crate::response::ok;

/// GET /api/store
///
/// Whole store: records, session, notifications, plus a summary over every
/// record against the configured class size.
pub async fn snapshot(State(state): State<AppState>) -> Response {
    let snap = state.store().snapshot();
    ok(
        SnapshotResponse::new(snap, config::default_class_size()),
        "Store snapshot retrieved",
    )
}

/// GET /api/store/records?student_id=&course_id=&date=
///
/// Records in insertion order. Every given filter must match exactly.
pub async fn records(State(state): State<AppState>, Query(filter): Query<RecordFilter>) -> Response {
    let records: Vec<_> = state.store().read(|s| {
        s.records()
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    });
    ok(records, "Attendance records retrieved")
}

/// GET /api/store/summary?date=&class_size=
pub async fn summary(State(state): State<AppState>, Query(q): Query<SummaryQuery>) -> Response {
    let class_size = q.class_size.unwrap_or_else(config::default_class_size);
    let summary = state.store().read(|s| match &q.date {
        Some(date) => AttendanceSummary::from_records(s.records_on(date), class_size),
        None => AttendanceSummary::from_records(s.records(), class_size),
    });
    ok(summary, "Attendance summary computed")
}

/// GET /api/store/notifications?limit=
///
/// Newest first, capped at `limit` (configured display limit by default).
pub async fn notifications(
    State(state): State<AppState>,
    Query(q): Query<NotificationQuery>,
) -> Response {
    let limit = q.limit.unwrap_or_else(config::notification_display_limit);
    let list = state.store().read(|s| s.recent_notifications(limit));
    ok(list, "Notifications retrieved")
}

/// GET /api/store/session
///
/// The active session, or `null` data when none is running.
pub async fn session(State(state): State<AppState>) -> Response {
    let session = state.store().read(|s| s.session().cloned());
    let message = if session.is_some() {
        "Session is active"
    } else {
        "No active session"
    };
    ok(session, message)
}
