use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::helpers::{ConfigOverride, body_json, get, json_request, make_test_app};

fn mark(student_id: &str, course_id: &str, date: &str, status: &str) -> Value {
    json!({
        "type": "MARK_ATTENDANCE",
        "payload": {
            "student_id": student_id,
            "student_name": "Ama Osei",
            "course_id": course_id,
            "course_name": "Computer Networks",
            "date": date,
            "time": "08:01:10",
            "status": status,
            "method": "QR Code",
            "location": "Room 101",
            "lecturer_name": "Dr. Sarah Johnson"
        }
    })
}

#[tokio::test]
async fn empty_store_snapshot() {
    let (app, _) = make_test_app().await;

    let response = app.oneshot(get("/api/store")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["phase"], "inactive");
    assert_eq!(json["data"]["session"], Value::Null);
    assert_eq!(json["data"]["records"], json!([]));
    assert_eq!(json["data"]["summary"]["total"], 0);
}

#[tokio::test]
async fn dispatch_mark_appends_with_fresh_id() {
    let (app, state) = make_test_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/store/dispatch", mark("S1", "CS301", "2025-09-08", "present")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["event"], "attendance_marked");
    let payload = &json["data"]["payload"];
    assert_eq!(payload["student_id"], "S1");
    assert_eq!(payload["method"], "QR Code");
    assert!(payload["id"].as_str().is_some_and(|id| !id.is_empty()));

    let records = state.store().read(|s| s.records().to_vec());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.to_string(), payload["id"].as_str().unwrap());
}

#[tokio::test]
async fn unknown_action_is_rejected_without_mutation() {
    let (app, state) = make_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/store/dispatch",
            json!({ "type": "DELETE_RECORD", "payload": {} }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().starts_with("Invalid action"));
    assert_eq!(state.store().snapshot(), store::AttendanceState::new());
}

#[tokio::test]
async fn records_and_summary_are_filtered() {
    let (app, _) = make_test_app().await;

    for body in [
        mark("S1", "CS301", "2025-09-08", "present"),
        mark("S2", "CS301", "2025-09-08", "late"),
        mark("S1", "CS302", "2025-09-08", "absent"),
        mark("S1", "CS301", "2025-09-09", "present"),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/store/dispatch", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(get("/api/store/records?student_id=S1&course_id=CS301"))
        .await
        .unwrap();
    let json = body_json(response).await;
    let dates: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2025-09-08", "2025-09-09"]);

    let response = app
        .oneshot(get("/api/store/summary?date=2025-09-08&class_size=4"))
        .await
        .unwrap();
    let json = body_json(response).await;
    let summary = &json["data"];
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["present"], 1);
    assert_eq!(summary["late"], 1);
    assert_eq!(summary["absent"], 1);
    assert_eq!(summary["by_method"]["QR Code"], 3);
    assert_eq!(summary["attendance_rate"], 50.0);
}

#[tokio::test]
async fn notifications_newest_first_and_capped() {
    let (app, _) = make_test_app().await;

    for message in ["first", "second", "third"] {
        let body = json!({
            "type": "ADD_NOTIFICATION",
            "payload": { "message": message, "type": "success" }
        });
        app.clone()
            .oneshot(json_request("POST", "/api/store/dispatch", body))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(get("/api/store/notifications?limit=2"))
        .await
        .unwrap();
    let json = body_json(response).await;
    let messages: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, ["third", "second"]);
}

#[tokio::test]
async fn session_lifecycle() {
    let (app, _) = make_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/store/session",
            json!({ "course_id": "CS301", "course_name": "Computer Networks" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let qr = json["data"]["qr_code"].as_str().unwrap().to_owned();
    assert!(qr.starts_with("CS301_"));
    assert!(qr["CS301_".len()..].parse::<i64>().is_ok());

    let json = body_json(app.clone().oneshot(get("/api/store/session")).await.unwrap()).await;
    assert_eq!(json["data"]["qr_code"], qr.as_str());
    assert_eq!(json["data"]["course_name"], "Computer Networks");

    let response = app
        .clone()
        .oneshot(json_request("DELETE", "/api/store/session", Value::Null))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["message"], "Session ended");
    assert_eq!(json["data"]["qr_code"], qr.as_str());

    // Ending again is a no-op.
    let response = app
        .clone()
        .oneshot(json_request("DELETE", "/api/store/session", Value::Null))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], Value::Null);

    let json = body_json(app.oneshot(get("/api/store")).await.unwrap()).await;
    assert_eq!(json["data"]["phase"], "inactive");
    assert_eq!(json["data"]["records"], json!([]));
}

#[tokio::test]
async fn start_session_validates_body() {
    let (app, state) = make_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/store/session",
            json!({ "course_id": "", "course_name": "Computer Networks" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "course_id must be 1-32 characters");
    assert!(state.store().read(|s| s.session().is_none()));
}

#[tokio::test]
async fn malformed_session_body_gets_an_envelope() {
    let (app, state) = make_test_app().await;

    for body in [
        json!({ "course_id": "CS301" }),
        json!({ "course_id": 301, "course_name": "Computer Networks" }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/store/session", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], Value::Null);
        assert!(json["message"].as_str().unwrap().starts_with("Invalid session: "));
    }
    assert!(state.store().read(|s| s.session().is_none()));
}

#[tokio::test]
async fn started_session_is_returned_as_applied() {
    let (app, state) = make_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/store/session",
            json!({ "course_id": "CS350", "course_name": "Web Development" }),
        ))
        .await
        .unwrap();
    let json = body_json(response).await;

    let session = state.store().read(|s| s.session().cloned()).unwrap();
    assert_eq!(json["data"], serde_json::to_value(&session).unwrap());
    assert_eq!(json["data"]["course_id"], "CS350");
}

#[tokio::test]
#[serial_test::serial]
async fn session_pulse_follows_the_session() {
    let _config = ConfigOverride::begin();
    util::config::AppConfig::set_session_pulse_seconds(60);
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
    assert_eq!(started.status(), StatusCode::CREATED);
    assert!(state.pulse_running());

    let ended = app
        .oneshot(json_request("DELETE", "/api/store/session", json!({})))
        .await
        .unwrap();
    assert_eq!(ended.status(), StatusCode::OK);
    assert!(!state.pulse_running());
}

