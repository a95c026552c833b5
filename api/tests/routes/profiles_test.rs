use axum::http::StatusCode;
use tower::ServiceExt;

use crate::helpers::{body_json, get, make_test_app, seed_campus};

#[tokio::test]
async fn profile_found() {
    let (app, state) = make_test_app().await;
    let campus = seed_campus(state.db()).await;

    let uri = format!("/api/profiles/{}", campus.ama.id);
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["full_name"], "Ama Osei");
    assert_eq!(json["data"]["student_number"], "UG/2023/001234");
    assert_eq!(json["data"]["role"], "student");
}

#[tokio::test]
async fn profile_missing() {
    let (app, _) = make_test_app().await;

    let response = app.oneshot(get("/api/profiles/12345")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Profile 12345 not found");
}
