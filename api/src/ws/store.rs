//! Live store feed over a WebSocket.
//!
//! On open the client receives one `snapshot` frame with the whole store,
//! then one frame per applied action in the order they were applied:
//!
//! ```json
//! { "event": "snapshot", "payload": { "records": [], "session": null, "notifications": [] } }
//! { "event": "attendance_marked", "payload": { "id": "…", "student_id": "S1", … } }
//! ```
//!
//! A client that falls behind the channel gets a fresh `snapshot` frame
//! instead of the events it missed. `{"type":"ping"}` is answered with a
//! `pong` frame.

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use chrono::Utc;
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use store::AttendanceStore;
use tokio::sync::{broadcast::error::RecvError, mpsc};
use util::state::AppState;

#[derive(Serialize)]
struct Frame<'a, T: Serialize> {
    event: &'a str,
    payload: T,
}

/// GET /ws/store
pub async fn store_ws_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    let store = app_state.store_clone();
    ws.on_upgrade(move |socket| serve_store(socket, store))
}

pub async fn serve_store(socket: WebSocket, store: AttendanceStore) {
    let (snapshot, mut events) = store.snapshot_and_subscribe();
    let (mut sink, mut socket_rx) = socket.split();

    let (out_tx, mut out_rx) = mpsc::channel::<Message>(64);
    let writer_task = tokio::spawn(async move {
        while let Some(frame) = out_rx.recv().await {
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    if let Some(text) = encode("snapshot", &snapshot) {
        if out_tx.send(Message::Text(text.into())).await.is_err() {
            writer_task.abort();
            return;
        }
    }
    tracing::debug!(subscribers = store.subscriber_count(), "store socket opened");

    // S→C: store events
    let forward_task = {
        let out_tx = out_tx.clone();
        let store = store.clone();
        tokio::spawn(async move {
            loop {
                let text = match events.recv().await {
                    Ok(event) => serde_json::to_string(&event).ok(),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "store socket lagged, resending snapshot");
                        encode("snapshot", &store.snapshot())
                    }
                    Err(RecvError::Closed) => break,
                };
                let Some(text) = text else { continue };
                if out_tx.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        })
    };

    // C→S: app-level ping only
    while let Some(Ok(msg)) = socket_rx.next().await {
        match msg {
            Message::Text(text) if is_app_ping(text.as_str()) => {
                if let Some(pong) = encode("pong", serde_json::json!({ "ts": Utc::now().to_rfc3339() })) {
                    let _ = out_tx.send(Message::Text(pong.into())).await;
                }
            }
            Message::Text(text) => {
                tracing::debug!(raw = %text.as_str(), "ignoring client frame on store socket");
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    forward_task.abort();
    let _ = forward_task.await;
    drop(out_tx);
    let _ = writer_task.await;
    tracing::debug!("store socket closed");
}

fn encode<T: Serialize>(event: &str, payload: T) -> Option<String> {
    serde_json::to_string(&Frame { event, payload })
        .inspect_err(|e| tracing::warn!(error = %e, event, "failed to encode store frame"))
        .ok()
}

fn is_app_ping(raw: &str) -> bool {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| v.get("type").and_then(Value::as_str).map(|t| t == "ping"))
        .unwrap_or(false)
}
