//! Periodic check-in notifications while a session is running.
//!
//! A pulse is bound to the session that was active when it was spawned
//! (identified by its QR code). On every tick it posts how many check-ins the
//! store holds for that session's course and start date. It stops on its own
//! when that session is ended or replaced, and it is aborted when its
//! [`SessionPulse`] handle is dropped.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::action::Action;
use crate::handle::AttendanceStore;
use crate::types::{ActiveSession, NewNotification, NotificationKind};

pub struct SessionPulse {
    task: JoinHandle<()>,
}

impl SessionPulse {
    /// Spawns a pulse for the currently active session.
    ///
    /// Returns `None` when no session is active or `period` is zero.
    pub fn spawn(store: AttendanceStore, period: Duration) -> Option<Self> {
        if period.is_zero() {
            return None;
        }
        let session = store.read(|s| s.session().cloned())?;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let still_current = store.read(|s| {
                    s.session().map(|cur| cur.qr_code == session.qr_code) == Some(true)
                });
                if !still_current {
                    tracing::debug!(qr_code = %session.qr_code, "session pulse stopped");
                    break;
                }

                let count = checked_in(&store, &session);
                store.dispatch(Action::AddNotification(NewNotification {
                    message: format!(
                        "{count} check-in(s) recorded for {}",
                        session.course_name
                    ),
                    kind: NotificationKind::Success,
                }));
            }
        });

        Some(Self { task })
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SessionPulse {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn checked_in(store: &AttendanceStore, session: &ActiveSession) -> usize {
    let date = session.started_at.date_naive().format("%Y-%m-%d").to_string();
    store.read(|s| {
        s.records_on(&date)
            .filter(|r| r.course_id == session.course_id)
            .count()
    })
}
