use axum::http::{StatusCode, header};
use tower::ServiceExt;

use crate::helpers::{body_json, get, make_test_app, seed_campus};

#[tokio::test]
async fn overview_lists_students_with_rates() {
    let (app, state) = make_test_app().await;
    let campus = seed_campus(state.db()).await;

    let uri = format!("/api/lecturers/{}/overview", campus.lecturer.id);
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["lecturer"]["full_name"], "Dr. Sarah Johnson");
    assert_eq!(data["courses"][0]["code"], "CS301");
    assert_eq!(data["sessions_held"], 3);

    let students = data["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["name"], "Ama Osei");
    assert_eq!(students[0]["sessions_attended"], 3);
    assert_eq!(students[0]["attendance_rate"], 100.0);
    assert_eq!(students[1]["name"], "Kojo Mensah");
    assert_eq!(students[1]["sessions_attended"], 1);
    assert_eq!(students[1]["attendance_rate"], 33.3);
    assert_eq!(data["average_attendance"], 66.7);
}

#[tokio::test]
async fn unknown_lecturer_is_404() {
    let (app, _) = make_test_app().await;

    let response = app.oneshot(get("/api/lecturers/999/overview")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Lecturer 999 not found");
}

#[tokio::test]
async fn report_downloads_as_text_attachment() {
    let (app, state) = make_test_app().await;
    let campus = seed_campus(state.db()).await;

    let uri = format!("/api/lecturers/{}/report", campus.lecturer.id);
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.starts_with("attachment; filename=\"attendance_report_"));
    assert!(disposition.ends_with(".txt\""));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("ATTENDANCE REPORT\n"));
    assert!(text.contains("Lecturer: Dr. Sarah Johnson\n"));
    assert!(text.contains("Total Students: 2\n"));
}

#[tokio::test]
async fn students_csv_has_quoted_rows() {
    let (app, state) = make_test_app().await;
    let campus = seed_campus(state.db()).await;

    let uri = format!("/api/lecturers/{}/students.csv", campus.lecturer.id);
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    assert!(
        response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("student_data_")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(r#""Student ID","Name","Email""#));
    assert!(lines[1].starts_with(r#""UG/2023/001234","Ama Osei","ama.osei@uni.edu","","CS301","100.0%""#));
}

#[tokio::test]
async fn report_for_unknown_lecturer_is_404() {
    let (app, _) = make_test_app().await;

    let response = app.oneshot(get("/api/lecturers/42/students.csv")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
