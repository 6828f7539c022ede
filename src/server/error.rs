use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::error::ProcessingError;

/// Errors surfaced by the HTTP layer
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body could not be decoded into a note request
    #[error("{0}")]
    InvalidRequest(#[from] JsonRejection),

    /// Note generation failed
    #[error("Error processing notes: {0}")]
    Processing(#[from] ProcessingError),
}

/// Error response body, `{"detail": "..."}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRequest(rejection) => {
                tracing::debug!(error = %rejection, "Rejected note request");
                rejection.status()
            }
            Self::Processing(e) => {
                tracing::error!(error = %e, "Note generation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_error_message() {
        let err = ApiError::from(ProcessingError::Generation("boom".to_string()));
        assert_eq!(err.to_string(), "Error processing notes: boom");
    }

    #[tokio::test]
    async fn test_processing_error_response() {
        let err = ApiError::from(ProcessingError::Generation("boom".to_string()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"detail":"Error processing notes: boom"}"#);
    }

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse {
            detail: "Error processing notes: boom".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"detail":"Error processing notes: boom"}"#);
    }
}
