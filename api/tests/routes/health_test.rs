use axum::http::StatusCode;
use tower::ServiceExt;

use crate::helpers::{body_json, get, make_test_app};

#[tokio::test]
async fn health_check_returns_ok_json() {
    let (app, _) = make_test_app().await;

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}
