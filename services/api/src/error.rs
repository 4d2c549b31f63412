//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_core::ports::PortError;
use serde::Serialize;
use utoipa::ToSchema;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents an error from the underlying database library.
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A request field failed validation. Nothing was stored or sent.
    #[error("Validation error on '{field}': {message}")]
    Validation { field: &'static str, message: String },

    /// The request body was not the JSON document the route expects.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// The JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// The offending request field, for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message,
                    field: Some(field.to_string()),
                },
            ),
            ApiError::InvalidBody(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message,
                    field: None,
                },
            ),
            other => {
                // Provider, storage and internal failures are indistinguishable to callers.
                tracing::error!("Request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Internal server error".to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
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
    async fn validation_errors_name_the_field() {
        let response = ApiError::validation("email", "Invalid email address").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Invalid email address", "field": "email" })
        );
    }

    #[tokio::test]
    async fn port_errors_are_hidden_behind_a_generic_message() {
        let response =
            ApiError::from(PortError::Completion("quota exceeded".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Internal server error" })
        );
    }
}
