//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Internal server error",
        "errorCode": 500
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body, field validation or business rule",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "price exceeds maximum allowed value of $10,000",
        "errorCode": 400
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid ID",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Invalid ID",
        "errorCode": 400
    })
)]
pub struct InvalidIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Product not found",
        "errorCode": 404
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
