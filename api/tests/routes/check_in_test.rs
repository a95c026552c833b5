use axum::http::StatusCode;
use serde_json::{Value, json};
use serial_test::serial;
use tower::ServiceExt;
use util::config::AppConfig;

use crate::helpers::{ConfigOverride, body_json, json_request, make_test_app};

fn body(method: &str, reading: Value) -> Value {
    let mut body = json!({
        "student_id": "UG/2023/001234",
        "student_name": "Ama Osei",
        "course_id": "CS302",
        "course_name": "Database Systems",
        "room": "Room 101",
        "lecturer_name": "Dr. John Smith",
        "method": method,
    });
    if let (Some(obj), Some(extra)) = (body.as_object_mut(), reading.as_object()) {
        obj.extend(extra.clone());
    }
    body
}

#[tokio::test]
#[serial]
async fn qr_check_in_against_active_session() {
    let (app, state) = make_test_app().await;

    let started = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/store/session",
            json!({ "course_id": "CS301", "course_name": "Computer Networks" }),
        ))
        .await
        .unwrap();
    let qr = body_json(started).await["data"]["qr_code"].clone();

    let response = app
        .oneshot(json_request("POST", "/api/check-in", body("qr_code", json!({ "qr": { "code": qr } }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let record = &json["data"]["record"];
    assert_eq!(record["method"], "QR Code");
    assert_eq!(record["status"], "present");
    assert_eq!(record["course_id"], "CS301");
    assert_eq!(
        json["data"]["notification"]["message"],
        "Ama Osei has marked attendance via QR Code"
    );

    let (records, notes) = state
        .store()
        .read(|s| (s.records().len(), s.notifications().len()));
    assert_eq!((records, notes), (1, 1));
}

#[tokio::test]
#[serial]
async fn qr_without_session_is_rejected() {
    let (app, state) = make_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/check-in",
            body("qr_code", json!({ "qr": { "code": "CS301_1" } })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "No active session");
    assert_eq!(state.store().snapshot(), store::AttendanceState::new());
}

#[tokio::test]
#[serial]
async fn face_below_threshold_is_rejected() {
    let _config = ConfigOverride::begin();
    AppConfig::set_face_match_threshold(90.0);
    let (app, state) = make_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/check-in",
            body("face_recognition", json!({ "face": { "confidence": 89.5 } })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Face match 89.5% is below the 90.0% threshold"
    );
    assert!(state.store().read(|s| s.records().is_empty()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/check-in",
            body("face_recognition", json!({ "face": { "confidence": 93.4 } })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["record"]["method"], "Face Recognition");
}

#[tokio::test]
#[serial]
async fn gps_check_in_records_coordinates() {
    let (app, _) = make_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/check-in",
            body(
                "gps",
                json!({ "gps": { "lat": 5.650712, "lng": -0.18643, "accuracy": 8.0 } }),
            ),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["data"]["record"]["location"],
        "Room 101 (5.6507, -0.1864)"
    );
}

#[tokio::test]
#[serial]
async fn missing_reading_means_capability_unavailable() {
    let (app, state) = make_test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/check-in", body("gps", json!({}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Capability unavailable: no reading supplied"
    );
    assert!(state.store().read(|s| s.notifications().is_empty()));
}

#[tokio::test]
#[serial]
async fn empty_student_id_fails_validation() {
    let (app, _) = make_test_app().await;

    let mut request = body("gps", json!({ "gps": { "lat": 0.0, "lng": 0.0, "accuracy": 1.0 } }));
    request["student_id"] = json!("");

    let response = app
        .oneshot(json_request("POST", "/api/check-in", request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "student_id is required");
}

#[tokio::test]
#[serial]
async fn unknown_method_is_rejected() {
    let (app, _) = make_test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/check-in", body("bluetooth", json!({}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(
        body_json(response).await["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid check-in")
    );
}
