//! Error types for the storefront service
//!
//! The response cache itself is infallible. These errors cover the catalog
//! and HTTP layers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == App Error Enum ==
/// Unified error type for the storefront service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Product id not present in the catalog
    #[error("Product not found: {0}")]
    NotFound(u64),

    /// Invalid request data (bad pagination, empty name, ...)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the storefront service.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (AppError::NotFound(7), StatusCode::NOT_FOUND),
            (
                AppError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_error_body_is_json() {
        let response = AppError::NotFound(42).into_response();

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.contains("application/json"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Product not found: 42");
    }
}
