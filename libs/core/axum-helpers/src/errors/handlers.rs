use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    let body = Json(ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "The HTTP method is not allowed for this resource",
    ));

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
