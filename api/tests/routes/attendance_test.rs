use axum::http::StatusCode;
use tower::ServiceExt;

use crate::helpers::{body_json, get, make_test_app, seed_campus};

#[tokio::test]
async fn feed_pages_newest_first() {
    let (app, state) = make_test_app().await;
    let campus = seed_campus(state.db()).await;

    let response = app
        .clone()
        .oneshot(get("/api/attendance/feed?page=1&per_page=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["total"], 4);
    assert_eq!(data["rows"].as_array().unwrap().len(), 3);

    let newest = &data["rows"][0];
    assert_eq!(newest["student_name"], "Ama Osei");
    assert_eq!(newest["method"], "Face Recognition");
    assert_eq!(newest["confidence"], "93.4%");
    assert_eq!(newest["status"], "verified");

    let kojo = &data["rows"][2];
    assert_eq!(kojo["student_number"], campus.kojo.id.to_string());
    assert_eq!(kojo["method"], "Qr Code");

    assert_eq!(data["stats"]["total_students"], 65);
    assert_eq!(data["stats"]["present_students"], 3);

    let json = body_json(
        app.oneshot(get("/api/attendance/feed?page=2&per_page=3"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(json["data"]["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["stats"]["present_students"], 4);
}

#[tokio::test]
async fn empty_feed() {
    let (app, _) = make_test_app().await;

    let json = body_json(app.oneshot(get("/api/attendance/feed")).await.unwrap()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["stats"]["attendance_rate"], 0);
}

#[tokio::test]
async fn huge_page_is_an_empty_page() {
    let (app, state) = make_test_app().await;
    seed_campus(state.db()).await;

    let response = app
        .oneshot(get("/api/attendance/feed?page=4611686018427387904&per_page=100"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["total"], 4);
    assert!(json["data"]["rows"].as_array().unwrap().is_empty());
}
