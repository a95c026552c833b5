//! In-memory attendance event store.
//!
//! Holds the attendance history, the current lecturer session and the
//! notification feed for one process. State only changes through
//! [`Action`]s dispatched on an [`AttendanceStore`]; every applied action is
//! published to subscribers as a [`StoreEvent`].
//!
//! ```
//! use store::{Action, AttendanceStore, SessionPhase, StartSession};
//!
//! let store = AttendanceStore::new();
//! store.dispatch(Action::StartSession(StartSession {
//!     course_id: "CS301".into(),
//!     course_name: "Computer Networks".into(),
//!     qr_code: "CS301_1725789600000".into(),
//! }));
//! assert_eq!(store.read(|s| s.phase()), SessionPhase::Active);
//!
//! store.dispatch(Action::EndSession);
//! assert_eq!(store.read(|s| s.phase()), SessionPhase::Inactive);
//! ```

pub mod action;
pub mod handle;
pub mod pulse;
pub mod state;
pub mod stats;
pub mod types;

pub use action::{Action, StoreEvent};
pub use handle::AttendanceStore;
pub use pulse::SessionPulse;
pub use state::{AttendanceState, Stamp, Stamper, SystemStamper};
pub use stats::AttendanceSummary;
pub use types::{
    ActiveSession, AttendanceRecord, AttendanceStatus, NewAttendanceRecord, NewNotification,
    Notification, NotificationKind, SessionPhase, StartSession, VerificationMethod,
};
