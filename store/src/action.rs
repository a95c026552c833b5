//! The closed set of transitions a store accepts, and the events it emits.

use serde::{Deserialize, Serialize};

use crate::types::{
    ActiveSession, AttendanceRecord, NewAttendanceRecord, NewNotification, Notification,
    StartSession,
};

/// A transition request.
///
/// On the wire an action is `{"type": "MARK_ATTENDANCE", "payload": {...}}`;
/// `END_SESSION` carries no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    MarkAttendance(NewAttendanceRecord),
    StartSession(StartSession),
    EndSession,
    AddNotification(NewNotification),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::MarkAttendance(_) => "MARK_ATTENDANCE",
            Action::StartSession(_) => "START_SESSION",
            Action::EndSession => "END_SESSION",
            Action::AddNotification(_) => "ADD_NOTIFICATION",
        }
    }
}

/// What an applied action changed. Broadcast to subscribers in the order the
/// transitions were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum StoreEvent {
    AttendanceMarked(AttendanceRecord),
    SessionStarted {
        session: ActiveSession,
        replaced: Option<ActiveSession>,
    },
    /// `ended` is `None` when no session was active.
    SessionEnded { ended: Option<ActiveSession> },
    NotificationAdded(Notification),
}
