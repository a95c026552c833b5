//! Application state container shared across Axum route handlers and services.
//!
//! This struct holds shared resources such as the database connection and the
//! attendance store. It is cloned into route handlers via Axum's `State<T>` extractor.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use sea_orm::DatabaseConnection;
use store::{AttendanceStore, SessionPulse};

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The process-wide `AttendanceStore` every consumer reads and dispatches to.
/// - The pulse timer of the running session, if any.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    store: AttendanceStore,
    pulse: Arc<Mutex<Option<SessionPulse>>>,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection and store.
    pub fn new(db: DatabaseConnection, store: AttendanceStore) -> Self {
        Self {
            db,
            store,
            pulse: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a shared reference to the attendance store.
    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    /// Replaces the session pulse with one bound to the currently active
    /// session. A zero `period` only cancels the previous pulse.
    pub fn restart_pulse(&self, period: Duration) {
        let next = SessionPulse::spawn(self.store.clone(), period);
        if next.is_some() {
            tracing::info!(period_secs = period.as_secs(), "session pulse armed");
        }
        let mut slot = self.pulse.lock().unwrap_or_else(|p| p.into_inner());
        *slot = next;
    }

    /// Cancels the session pulse, if one is running.
    pub fn stop_pulse(&self) {
        let mut slot = self.pulse.lock().unwrap_or_else(|p| p.into_inner());
        slot.take();
    }

    pub fn pulse_running(&self) -> bool {
        let slot = self.pulse.lock().unwrap_or_else(|p| p.into_inner());
        slot.as_ref().is_some_and(|p| !p.is_finished())
    }

    /// Returns a handle sharing the same store.
    pub fn store_clone(&self) -> AttendanceStore {
        self.store.clone()
    }
}
