use serde::Deserialize;
use services::check_in::{CheckInRequest, FaceReading, GpsReading, QrReading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInMethod {
    QrCode,
    FaceRecognition,
    Gps,
}

/// Check-in body: who and where, the chosen method, and whatever the
/// device captured for it.
///
/// ```json
/// {
///   "student_id": "UG/2023/001234",
///   "student_name": "Ama Osei",
///   "course_id": "CS301",
///   "course_name": "Computer Networks",
///   "room": "Room 101",
///   "lecturer_name": "Dr. Sarah Johnson",
///   "method": "gps",
///   "gps": { "lat": 5.6507, "lng": -0.1864, "accuracy": 8.0 }
/// }
/// ```
///
/// A missing reading for the chosen method is treated as an unavailable device.
#[derive(Debug, Deserialize)]
pub struct CheckInBody {
    #[serde(flatten)]
    pub request: CheckInRequest,
    pub method: CheckInMethod,
    pub qr: Option<QrReading>,
    pub face: Option<FaceReading>,
    pub gps: Option<GpsReading>,
}
