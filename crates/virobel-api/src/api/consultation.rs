/// Consultation request endpoint
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use virobel_core::ConsultError;
use virobel_core::constants::MSG_SUCCESS;
use virobel_core::models::ConsultationRequest;
use virobel_core::utils::client_ip;

use crate::{context::ApiContext, error::ApiError};

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

/// Method dispatch for the single endpoint
pub async fn dispatch(
    State(ctx): State<Arc<ApiContext>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return preflight().await.into_response();
    }

    match submit(&ctx, &method, &headers, body).await {
        Ok(response) => response.into_response(),
        Err(err) => {
            if !err.is_client_error() {
                error!(error = %err, "Error in send-consultation-email handler");
            }
            ApiError::from(err).into_response()
        }
    }
}

/// CORS preflight; never rate limited or validated
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Handles one consultation submission
async fn submit(
    ctx: &ApiContext,
    method: &Method,
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmissionResponse>, ConsultError> {
    let client_ip = client_ip(headers);
    ctx.service.check_rate_limit(&client_ip).await?;

    if *method != Method::POST {
        return Err(ConsultError::Transport(format!(
            "Unsupported method {}",
            method
        )));
    }

    let body = body.map_err(|e| ConsultError::Transport(format!("Unreadable body: {}", e)))?;
    let request = ConsultationRequest::from_json(&body)?;

    ctx.service.submit(request).await?;

    Ok(Json(SubmissionResponse {
        success: true,
        message: MSG_SUCCESS.to_string(),
    }))
}
