use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use store::AttendanceStore;
use util::state::AppState;

/// Router over a fresh in-memory database and an empty store.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let state = AppState::new(db, AttendanceStore::new());
    (api::app(state.clone()), state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
