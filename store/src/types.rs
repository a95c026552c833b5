//! Value types held by the attendance store.
//!
//! Records, the active session and notifications are plain data. Every value
//! is created by a transition in [`crate::state`] and never edited afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome recorded for a student on a given class meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
        };
        f.write_str(s)
    }
}

/// How a check-in was attested.
///
/// The three known methods serialize to their display labels. Any other label
/// is carried verbatim in [`VerificationMethod::Other`], the store never
/// rejects a method it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VerificationMethod {
    QrCode,
    FaceRecognition,
    Gps,
    Other(String),
}

impl VerificationMethod {
    pub fn label(&self) -> &str {
        match self {
            VerificationMethod::QrCode => "QR Code",
            VerificationMethod::FaceRecognition => "Face Recognition",
            VerificationMethod::Gps => "GPS",
            VerificationMethod::Other(label) => label,
        }
    }
}

impl From<String> for VerificationMethod {
    fn from(label: String) -> Self {
        match label.as_str() {
            "QR Code" => VerificationMethod::QrCode,
            "Face Recognition" => VerificationMethod::FaceRecognition,
            "GPS" => VerificationMethod::Gps,
            _ => VerificationMethod::Other(label),
        }
    }
}

impl From<&str> for VerificationMethod {
    fn from(label: &str) -> Self {
        VerificationMethod::from(label.to_string())
    }
}

impl From<VerificationMethod> for String {
    fn from(method: VerificationMethod) -> Self {
        match method {
            VerificationMethod::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload of a `MARK_ATTENDANCE` action: a record without its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    /// Calendar date as supplied by the caller (e.g. `2025-09-08`).
    pub date: String,
    /// Wall-clock time as supplied by the caller (e.g. `10:15:02`).
    pub time: String,
    pub status: AttendanceStatus,
    pub method: VerificationMethod,
    pub location: String,
    pub lecturer_name: String,
}

/// An appended attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    pub date: String,
    pub time: String,
    pub status: AttendanceStatus,
    pub method: VerificationMethod,
    pub location: String,
    pub lecturer_name: String,
}

impl AttendanceRecord {
    pub fn from_new(id: Uuid, new: NewAttendanceRecord) -> Self {
        Self {
            id,
            student_id: new.student_id,
            student_name: new.student_name,
            course_id: new.course_id,
            course_name: new.course_name,
            date: new.date,
            time: new.time,
            status: new.status,
            method: new.method,
            location: new.location,
            lecturer_name: new.lecturer_name,
        }
    }
}

/// Payload of a `START_SESSION` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSession {
    pub course_id: String,
    pub course_name: String,
    pub qr_code: String,
}

/// The single lecturer-initiated session a store may hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub course_id: String,
    pub course_name: String,
    pub qr_code: String,
    pub started_at: DateTime<Utc>,
}

/// Observable session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Inactive,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
}

/// Payload of an `ADD_NOTIFICATION` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
}
