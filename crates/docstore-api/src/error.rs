//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docstore_core::StoreError;
use serde::Serialize;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error. Carries the internal detail for logging;
    /// the response body gets a fixed message with no filesystem detail.
    Internal(String),
}

/// Standard error response format: a single `error` field
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage failure".to_string(),
                )
            }
        };

        if status.is_client_error() {
            tracing::debug!(status = %status, error = %message, "API client error");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyName => {
                ApiError::BadRequest("No file selected for uploading".to_string())
            }
            StoreError::InvalidName(_) => {
                ApiError::BadRequest("Invalid document name".to_string())
            }
            StoreError::NotFound(_) => ApiError::NotFound("Document not found".to_string()),
            StoreError::Io(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_serializes_single_error_field() {
        let response =
            ApiError::BadRequest("No file part in the request".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "No file part in the request"})
        );
    }

    #[tokio::test]
    async fn not_found_store_error_maps_to_contract_body() {
        let err: ApiError = StoreError::NotFound("missing.txt".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Document not found"})
        );
    }

    #[tokio::test]
    async fn io_error_maps_to_500_without_detail_leakage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/secret/path denied");
        let err: ApiError = StoreError::Io(io).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"error": "Storage failure"}));
    }

    #[tokio::test]
    async fn invalid_name_maps_to_400() {
        let err: ApiError = StoreError::InvalidName("../etc".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid document name"})
        );
    }
}
