//! Error handling for the Weather Forecast API
//!
//! The forecast queries themselves never fail; these errors cover request
//! validation, startup and the dataset loader.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Invalid time order: {0}")]
    InvalidTimeOrder(String),

    #[error("Invalid timestamp for `{field}`: {value}")]
    InvalidTimestamp { field: String, value: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Startup errors
    #[error("Dataset load error: {0}")]
    DatasetLoad(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidTimeOrder(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTimestamp { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatasetLoad(_) | AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_detail = match &self {
            AppError::InvalidTimeOrder(msg) => ErrorDetail {
                code: "INVALID_TIME_ORDER".to_string(),
                message: msg.clone(),
                field: None,
            },
            AppError::InvalidTimestamp { field, value } => ErrorDetail {
                code: "INVALID_TIMESTAMP".to_string(),
                message: format!("Could not parse `{}` as a timestamp", value),
                field: Some(field.clone()),
            },
            AppError::NotFound(msg) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: msg.clone(),
                field: None,
            },
            AppError::DatasetLoad(msg) => ErrorDetail {
                code: "DATASET_LOAD_ERROR".to_string(),
                message: format!("Dataset load error: {}", msg),
                field: None,
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message: format!("Configuration error: {}", msg),
                field: None,
            },
            AppError::Internal(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal server error occurred".to_string(),
                field: None,
            },
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (self.status_code(), Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
