//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use upclink_upstream::UpstreamError;

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Upstream error detail, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("invalid multipart upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("upload staging failed: {0}")]
    Staging(#[from] std::io::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(UpstreamError::EmptyBatch) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Staging(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the response body for this error.
    fn body(&self) -> ErrorResponse {
        match self {
            Self::BadRequest(message) => ErrorResponse {
                error: message.clone(),
                details: None,
            },
            Self::Multipart(e) => ErrorResponse {
                error: e.to_string(),
                details: None,
            },
            Self::Upstream(UpstreamError::EmptyBatch) => ErrorResponse {
                error: "No valid barcodes in batch".to_string(),
                details: None,
            },
            // 500 body relays the upstream response body where one exists,
            // else the client error message.
            Self::Upstream(e) => ErrorResponse {
                error: "eBay proxy failed".to_string(),
                details: Some(e.detail()),
            },
            Self::Staging(e) => ErrorResponse {
                error: "Failed to process uploaded file".to_string(),
                details: Some(Value::String(e.to_string())),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
