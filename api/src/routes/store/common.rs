use serde::{Deserialize, Serialize};
use store::{
    ActiveSession, AttendanceRecord, AttendanceState, AttendanceSummary, Notification, SessionPhase,
};
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub records: Vec<AttendanceRecord>,
    pub phase: SessionPhase,
    pub session: Option<ActiveSession>,
    pub notifications: Vec<Notification>,
    pub summary: AttendanceSummary,
}

impl SnapshotResponse {
    pub fn new(state: AttendanceState, class_size: usize) -> Self {
        let summary = AttendanceSummary::from_records(state.records(), class_size);
        Self {
            phase: state.phase(),
            session: state.session().cloned(),
            records: state.records().to_vec(),
            notifications: state.notifications().to_vec(),
            summary,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordFilter {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
    pub date: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, r: &AttendanceRecord) -> bool {
        self.student_id.as_ref().is_none_or(|v| *v == r.student_id)
            && self.course_id.as_ref().is_none_or(|v| *v == r.course_id)
            && self.date.as_ref().is_none_or(|v| *v == r.date)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    pub date: Option<String>,
    pub class_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StartSessionReq {
    #[validate(length(min = 1, max = 32, message = "course_id must be 1-32 characters"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "course_name is required"))]
    pub course_name: String,
}

/// `<course_id>_<unix millis>`, e.g. `CS301_1725789600000`.
pub fn session_qr_code(course_id: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    format!("{course_id}_{}", now.timestamp_millis())
}
