//! Store contents and the pure transition function.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::{Action, StoreEvent};
use crate::types::{ActiveSession, AttendanceRecord, Notification, SessionPhase};

/// Identifier and time handed to a transition.
///
/// Keeping generation outside of [`AttendanceState::apply`] makes the
/// transition deterministic for a given stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub id: Uuid,
    pub at: DateTime<Utc>,
}

/// Source of stamps for a store.
pub trait Stamper: Send + Sync {
    fn stamp(&self) -> Stamp;
}

/// Random v4 identifiers and the wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn stamp(&self) -> Stamp {
        Stamp {
            id: Uuid::new_v4(),
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceState {
    records: Vec<AttendanceRecord>,
    session: Option<ActiveSession>,
    notifications: Vec<Notification>,
}

impl AttendanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action`. Every action succeeds.
    pub fn apply(&mut self, action: Action, stamp: Stamp) -> StoreEvent {
        match action {
            Action::MarkAttendance(new) => {
                let record = AttendanceRecord::from_new(stamp.id, new);
                self.records.push(record.clone());
                StoreEvent::AttendanceMarked(record)
            }
            Action::StartSession(start) => {
                let session = ActiveSession {
                    course_id: start.course_id,
                    course_name: start.course_name,
                    qr_code: start.qr_code,
                    started_at: stamp.at,
                };
                let replaced = self.session.replace(session.clone());
                StoreEvent::SessionStarted { session, replaced }
            }
            Action::EndSession => StoreEvent::SessionEnded {
                ended: self.session.take(),
            },
            Action::AddNotification(new) => {
                let notification = Notification {
                    message: new.message,
                    kind: new.kind,
                    timestamp: stamp.at,
                };
                self.notifications.push(notification.clone());
                StoreEvent::NotificationAdded(notification)
            }
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn session(&self) -> Option<&ActiveSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        match self.session {
            Some(_) => SessionPhase::Active,
            None => SessionPhase::Inactive,
        }
    }

    /// All notifications in insertion order.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// The newest `limit` notifications, newest first.
    pub fn recent_notifications(&self, limit: usize) -> Vec<Notification> {
        self.notifications.iter().rev().take(limit).cloned().collect()
    }

    /// Records whose `date` equals `date` verbatim.
    pub fn records_on<'a>(&'a self, date: &'a str) -> impl Iterator<Item = &'a AttendanceRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }
}
