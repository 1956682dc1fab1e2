//! Error handling module for the FoodBridge backend.
//!
//! Provides a centralized error type with mapping to HTTP status codes and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::schema::ValidationError;

/// Message returned for every 5xx; details stay in the logs.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Invalid field in a creation body
    Validation(ValidationError),
    /// Body could not be read as JSON
    BadRequest(String),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(err) => err.message.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "validation failed: {}", err),
            AppError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            AppError::Database(msg) => write!(f, "database: {}", msg),
            AppError::Internal(msg) => write!(f, "internal: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

/// Error response body: `{message}` or `{message, field}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::Validation(err) => Self {
                message: err.message.clone(),
                field: err.field.clone(),
            },
            AppError::BadRequest(msg) => Self {
                message: msg.clone(),
                field: None,
            },
            AppError::Database(_) | AppError::Internal(_) => Self {
                message: INTERNAL_MESSAGE.to_string(),
                field: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400_with_field() {
        let err = AppError::from(ValidationError::new("donorName", "Donor name is required"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["message"], "Donor name is required");
        assert_eq!(body["field"], "donorName");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::Database("disk I/O error at /var/lib/x".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["message"], INTERNAL_MESSAGE);
        assert!(body.get("field").is_none());
    }
}
