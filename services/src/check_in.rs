//! Student check-in.
//!
//! A check-in captures one reading from a device [`Capability`] (camera QR
//! scan, face match, GPS fix), checks it against the store and the
//! [`CheckInPolicy`], and only then dispatches `MARK_ATTENDANCE` followed by a
//! success `ADD_NOTIFICATION`. Any failure before that point leaves the store
//! untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::{
    Action, AttendanceRecord, AttendanceState, AttendanceStatus, AttendanceStore,
    NewAttendanceRecord, NewNotification, Notification, NotificationKind, StoreEvent,
    VerificationMethod,
};
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("capability unavailable: {0}")]
    Unavailable(String),
}

/// A device feed that yields one reading per capture.
pub trait Capability {
    type Reading;

    fn capture(&self) -> Result<Self::Reading, CaptureError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrReading {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceReading {
    /// Match confidence in percent.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsReading {
    pub lat: f64,
    pub lng: f64,
    /// Metres.
    pub accuracy: f64,
}

/// A reading captured elsewhere and handed over as-is, e.g. from a request body.
#[derive(Debug, Clone)]
pub struct Supplied<R>(pub Option<R>);

impl<R: Clone> Capability for Supplied<R> {
    type Reading = R;

    fn capture(&self) -> Result<R, CaptureError> {
        self.0
            .clone()
            .ok_or_else(|| CaptureError::Unavailable("no reading supplied".into()))
    }
}

#[derive(Debug, Error)]
pub enum CheckInError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("no active session")]
    NoActiveSession,

    #[error("QR code does not match the active session")]
    QrMismatch,

    #[error("face match {confidence:.1}% is below the {threshold:.1}% threshold")]
    FaceNotVerified { confidence: f64, threshold: f64 },

    #[error("GPS position ({lat}, {lng}) is out of range")]
    InvalidPosition { lat: f64, lng: f64 },
}

/// Who is checking in, and for what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckInRequest {
    #[validate(length(min = 1, message = "student_id is required"))]
    pub student_id: String,
    #[validate(length(min = 1, message = "student_name is required"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "course_id is required"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "course_name is required"))]
    pub course_name: String,
    #[validate(length(min = 1, message = "room is required"))]
    pub room: String,
    #[serde(default)]
    pub lecturer_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInPolicy {
    pub face_match_threshold: f64,
}

impl Default for CheckInPolicy {
    fn default() -> Self {
        Self {
            face_match_threshold: 85.0,
        }
    }
}

impl CheckInPolicy {
    pub fn from_config() -> Self {
        Self {
            face_match_threshold: util::config::face_match_threshold(),
        }
    }
}

/// What a verified reading contributes to the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attestation {
    pub method: VerificationMethod,
    pub course_id: String,
    pub course_name: String,
    pub location: String,
}

/// Verification of a captured reading.
pub trait Attest {
    fn attest(
        self,
        state: &AttendanceState,
        request: &CheckInRequest,
        policy: &CheckInPolicy,
    ) -> Result<Attestation, CheckInError>;
}

impl Attest for QrReading {
    /// The code must be the active session's; the record is filed under that
    /// session's course.
    fn attest(
        self,
        state: &AttendanceState,
        request: &CheckInRequest,
        _policy: &CheckInPolicy,
    ) -> Result<Attestation, CheckInError> {
        let session = state.session().ok_or(CheckInError::NoActiveSession)?;
        if session.qr_code != self.code {
            return Err(CheckInError::QrMismatch);
        }
        Ok(Attestation {
            method: VerificationMethod::QrCode,
            course_id: session.course_id.clone(),
            course_name: session.course_name.clone(),
            location: request.room.clone(),
        })
    }
}

impl Attest for FaceReading {
    fn attest(
        self,
        _state: &AttendanceState,
        request: &CheckInRequest,
        policy: &CheckInPolicy,
    ) -> Result<Attestation, CheckInError> {
        // NaN never reaches the threshold.
        if !(self.confidence >= policy.face_match_threshold) {
            return Err(CheckInError::FaceNotVerified {
                confidence: self.confidence,
                threshold: policy.face_match_threshold,
            });
        }
        Ok(Attestation {
            method: VerificationMethod::FaceRecognition,
            course_id: request.course_id.clone(),
            course_name: request.course_name.clone(),
            location: request.room.clone(),
        })
    }
}

impl Attest for GpsReading {
    fn attest(
        self,
        _state: &AttendanceState,
        request: &CheckInRequest,
        _policy: &CheckInPolicy,
    ) -> Result<Attestation, CheckInError> {
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lng) {
            return Err(CheckInError::InvalidPosition {
                lat: self.lat,
                lng: self.lng,
            });
        }
        Ok(Attestation {
            method: VerificationMethod::Gps,
            course_id: request.course_id.clone(),
            course_name: request.course_name.clone(),
            location: format!("{} ({:.4}, {:.4})", request.room, self.lat, self.lng),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckInReceipt {
    pub record: AttendanceRecord,
    pub notification: Notification,
}

pub struct CheckInService;

impl CheckInService {
    pub fn check_in<C>(
        store: &AttendanceStore,
        request: &CheckInRequest,
        capability: &C,
        policy: &CheckInPolicy,
    ) -> Result<CheckInReceipt, CheckInError>
    where
        C: Capability,
        C::Reading: Attest,
    {
        Self::check_in_at(store, request, capability, policy, Utc::now())
    }

    /// Same as [`CheckInService::check_in`] with the record dated at `now`.
    pub fn check_in_at<C>(
        store: &AttendanceStore,
        request: &CheckInRequest,
        capability: &C,
        policy: &CheckInPolicy,
        now: DateTime<Utc>,
    ) -> Result<CheckInReceipt, CheckInError>
    where
        C: Capability,
        C::Reading: Attest,
    {
        let reading = capability.capture().inspect_err(|err| {
            tracing::warn!(student_id = %request.student_id, error = %err, "check-in capture failed");
        })?;

        // Checked and recorded under one write lock.
        let events = store.dispatch_with(|state| {
            let attestation = reading.attest(state, request, policy)?;
            let message = format!(
                "{} has marked attendance via {}",
                request.student_name, attestation.method
            );
            Ok::<_, CheckInError>(vec![
                Action::MarkAttendance(NewAttendanceRecord {
                    student_id: request.student_id.clone(),
                    student_name: request.student_name.clone(),
                    course_id: attestation.course_id,
                    course_name: attestation.course_name,
                    date: now.format("%Y-%m-%d").to_string(),
                    time: now.format("%H:%M:%S").to_string(),
                    status: AttendanceStatus::Present,
                    method: attestation.method,
                    location: attestation.location,
                    lecturer_name: request.lecturer_name.clone(),
                }),
                Action::AddNotification(NewNotification {
                    message,
                    kind: NotificationKind::Success,
                }),
            ])
        })?;

        let (record, notification) = match <[StoreEvent; 2]>::try_from(events) {
            Ok([StoreEvent::AttendanceMarked(record), StoreEvent::NotificationAdded(notification)]) => {
                (record, notification)
            }
            other => unreachable!("check-in applied as {other:?}"),
        };
        tracing::info!(
            student_id = %record.student_id,
            course_id = %record.course_id,
            method = %record.method,
            "attendance marked"
        );

        Ok(CheckInReceipt {
            record,
            notification,
        })
    }
}
