use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use services::{
    export,
    lecturer::{LecturerOverview, LecturerService},
};
use util::state::AppState;

use crate::response::ok;
use crate::routes::common::service_error;

/// GET /api/lecturers/{lecturer_id}/overview
///
/// Courses, enrolled students with their attendance, and today's totals.
///
/// - `200 OK`
/// - `404 Not Found` if the id is not a lecturer
pub async fn overview(State(state): State<AppState>, Path(lecturer_id): Path<i64>) -> Response {
    match LecturerService::overview(state.db(), lecturer_id).await {
        Ok(overview) => ok(overview, "Lecturer overview retrieved"),
        Err(e) => service_error(e),
    }
}

/// GET /api/lecturers/{lecturer_id}/report
///
/// `text/plain` attachment named `attendance_report_<date>.txt`.
pub async fn report(State(state): State<AppState>, Path(lecturer_id): Path<i64>) -> Response {
    download(state, lecturer_id, "text/plain; charset=utf-8", |o| {
        (export::report_file_name(o.generated_at), export::attendance_report(o))
    })
    .await
}

/// GET /api/lecturers/{lecturer_id}/students.csv
///
/// `text/csv` attachment named `student_data_<date>.csv`.
pub async fn students_csv(State(state): State<AppState>, Path(lecturer_id): Path<i64>) -> Response {
    download(state, lecturer_id, "text/csv; charset=utf-8", |o| {
        (export::csv_file_name(o.generated_at), export::students_csv(o))
    })
    .await
}

async fn download(
    state: AppState,
    lecturer_id: i64,
    content_type: &'static str,
    render: impl FnOnce(&LecturerOverview) -> (String, String),
) -> Response {
    let overview = match LecturerService::overview(state.db(), lecturer_id).await {
        Ok(o) => o,
        Err(e) => return service_error(e),
    };
    let (filename, body) = render(&overview);

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .unwrap_or(HeaderValue::from_static("attachment")),
    );

    (StatusCode::OK, headers, body).into_response()
}
