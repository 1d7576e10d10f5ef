/// Virobel API - consultation request endpoint
///
/// This module wires the consultation handler into an axum router and
/// adapts it to the Lambda HTTP runtime.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header},
    middleware as axum_middleware,
};
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use virobel_core::constants::{CORS_ALLOW_HEADERS, CORS_ALLOW_ORIGIN, MAX_REQUEST_BODY_BYTES};

/// Builds the router.
///
/// The endpoint answers on every path and dispatches on the HTTP method.
/// CORS headers are set on every response, errors included.
pub fn router(ctx: Arc<ApiContext>) -> Router {
    Router::new()
        .fallback(api::consultation::dispatch)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .with_state(ctx)
}

/// Main Lambda handler - converts Lambda HTTP request to Axum router
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    info!("Processing API request: {} {}", event.method(), event.uri().path());

    let app = router(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let axum_request = http::Request::from_parts(parts, AxumBody::from(body.to_vec()));

    let response = app
        .oneshot(axum_request)
        .await
        .unwrap_or_else(|never| match never {});

    into_lambda_response(response).await
}

/// Buffers an axum response into a Lambda response.
///
/// A body that fails mid-stream is an invocation error rather than a
/// truncated reply.
async fn into_lambda_response(
    response: http::Response<AxumBody>,
) -> Result<Response<Body>, LambdaError> {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await?;

    Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
}
