pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Message sent to clients for any failure whose cause must stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Standard failure body.
///
/// `errorCode` always mirrors the HTTP status of the response.
///
/// ```json
/// { "success": false, "error": "Product not found", "errorCode": 404 }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false` for failures
    pub success: bool,
    /// Human-readable error message
    pub error: String,
    /// HTTP status code
    #[serde(rename = "errorCode")]
    #[schema(example = 400)]
    pub error_code: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            error_code: status.as_u16(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::PathRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(status = %e.status(), "JSON extraction error: {}", e.body_text());
                e.body_text()
            }
            AppError::PathRejection(e) => {
                tracing::warn!("Path extraction error: {}", e.body_text());
                e.body_text()
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                validation_message(&e)
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

/// Flatten validator output into one line, e.g.
/// `name: must be between 2 and 255 characters; price: must be greater than 0`.
///
/// Fields are sorted so the message is stable.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => {
                let detail = errs
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!("{}: {}", field, detail))
            }
            _ => None,
        })
        .collect();
    parts.sort();

    if parts.is_empty() {
        "Request validation failed".to_string()
    } else {
        parts.join("; ")
    }
}
