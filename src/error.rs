use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Awaiting admin approval")]
    PendingApproval,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Request already pending for this product")]
    DuplicateRequest,
    #[error("Print permission already granted for this product")]
    AlreadyGranted,
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::PendingApproval => {
                (StatusCode::FORBIDDEN, "Awaiting admin approval".to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::DuplicateRequest => (
                StatusCode::BAD_REQUEST,
                "Request already pending for this product".to_string(),
            ),
            AppError::AlreadyGranted => (
                StatusCode::BAD_REQUEST,
                "Print permission already granted for this product".to_string(),
            ),
            AppError::Storage(e) => {
                error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save user data.".to_string(),
                )
            }
            AppError::Serialization(e) => {
                error!("Serialization error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save user data.".to_string(),
                )
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}
