use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Envelope for every JSON body the API returns.
///
/// ```json
/// {
///   "success": true,
///   "data": { "course_id": "CS301", "qr_code": "CS301_1725789600000" },
///   "message": "Session started"
/// }
/// ```
///
/// Failed requests carry `"success": false`, a `null` (or default) `data`
/// and a human-readable `message`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Failure envelope with `T::default()` as data.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// `status` with a failure envelope whose `data` is `null`.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

/// `200 OK` with a success envelope.
pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data, message))).into_response()
}
