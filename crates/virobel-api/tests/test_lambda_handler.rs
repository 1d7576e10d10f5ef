/// Lambda adapter tests
///
/// The Lambda entry point converts API Gateway events to axum requests and
/// back; these tests check that the conversion keeps status, headers and
/// body intact.
#[path = "common/mod.rs"]
mod common;

use common::{jane_doe, test_context};
use lambda_http::{Body, Request};
use tokio_test::assert_ok;
use virobel_core::services::RecordingEmailProvider;

fn lambda_request(method: &str, body: Body) -> Request {
    lambda_http::http::Request::builder()
        .method(method)
        .uri("/send-consultation-email")
        .header("content-type", "application/json")
        .header("x-real-ip", "192.0.2.10")
        .body(body)
        .unwrap()
}

#[tokio::test]
async fn lambda_submission_round_trip() {
    let provider = RecordingEmailProvider::new();
    let ctx = test_context(&provider);

    let request = lambda_request("POST", Body::from(jane_doe().to_string()));
    let response = assert_ok!(virobel_api::handler(ctx, request).await);

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(provider.sent().len(), 2);
}

#[tokio::test]
async fn lambda_preflight() {
    let provider = RecordingEmailProvider::new();
    let ctx = test_context(&provider);

    let response =
        assert_ok!(virobel_api::handler(ctx, lambda_request("OPTIONS", Body::Empty)).await);

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
    assert!(response.body().is_empty());
    assert!(provider.sent().is_empty());
}
