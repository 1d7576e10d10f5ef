//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use virobel_api::{ApiContext, router};
use virobel_core::models::AppConfig;
use virobel_core::services::{InMemoryRateLimiter, RecordingEmailProvider};

/// Context backed by a recording provider and a fresh in-memory limiter
pub fn test_context(provider: &RecordingEmailProvider) -> Arc<ApiContext> {
    ApiContext::from_parts(
        AppConfig::default(),
        Arc::new(provider.clone()),
        Arc::new(InMemoryRateLimiter::new()),
    )
}

/// The reference submission used across tests
pub fn jane_doe() -> Value {
    serde_json::json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+1 555 1234",
        "location": "Zurich",
        "message": "Interested in family office services"
    })
}

pub fn post(ip: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends one request through a fresh router over the shared context
pub async fn send(ctx: &Arc<ApiContext>, request: Request<Body>) -> Response<Body> {
    router(Arc::clone(ctx)).oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
