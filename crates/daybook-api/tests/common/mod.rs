//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use daybook_api::routes;
use daybook_api::state::AppState;
use daybook_core::store::TaskStore;
use daybook_test_support::InMemoryTaskStore;

/// Build the full app router over the given store. Uses the same route
/// structure as `main.rs`.
pub fn build_test_app(store: Arc<dyn TaskStore>) -> Router {
    let app_state = AppState::new(store);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::check_data::router())
        .merge(routes::tasks::router())
        .with_state(app_state)
}

/// Build the app over a fresh in-memory store.
pub fn in_memory_app() -> Router {
    build_test_app(Arc::new(InMemoryTaskStore::new()))
}

/// Send a GET request and return the response as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the raw body as text.
pub async fn get_text(app: Router, uri: &str, accept: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(accept) = accept {
        builder = builder.header("accept", accept);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a request with a JSON body and return the response as JSON.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", uri, body).await
}

/// Send a DELETE request and return the response as JSON.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// A valid create-task body; callers override fields as needed.
pub fn task_body(text: &str, date: &str, time: &str, event_type: &str) -> serde_json::Value {
    serde_json::json!({
        "text": text,
        "formattedText": format!("{text}'s Birthday"),
        "date": date,
        "time": time,
        "eventType": event_type,
        "completed": false,
    })
}
