#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use token_service::{AppState, cache::MemoryTokenStore, routes, services::TokenConfig};
use tower::ServiceExt;

pub fn app_with_ttl(ttl: Duration) -> (Router, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let state = AppState::new(store.clone(), TokenConfig::new(ttl));
    (routes::create_router(state), store)
}

pub fn app() -> (Router, Arc<MemoryTokenStore>) {
    app_with_ttl(Duration::from_secs(60))
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
