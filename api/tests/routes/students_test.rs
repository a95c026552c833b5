use axum::http::StatusCode;
use tower::ServiceExt;

use crate::helpers::{body_json, get, make_test_app, seed_campus};

#[tokio::test]
async fn summary_counts_attended_and_missed() {
    let (app, state) = make_test_app().await;
    let campus = seed_campus(state.db()).await;

    let uri = format!("/api/students/{}/summary", campus.kojo.id);
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["student"]["full_name"], "Kojo Mensah");
    assert_eq!(data["courses"][0]["code"], "CS301");
    assert_eq!(data["sessions_held"], 3);
    assert_eq!(data["attended"], 1);
    assert_eq!(data["missed"], 2);
    assert_eq!(data["attendance_rate"], 33.3);
}

#[tokio::test]
async fn lecturer_is_not_a_student() {
    let (app, state) = make_test_app().await;
    let campus = seed_campus(state.db()).await;

    let uri = format!("/api/students/{}/summary", campus.lecturer.id);
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
