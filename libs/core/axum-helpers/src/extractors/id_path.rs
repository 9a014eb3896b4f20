//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Message returned when the `{id}` segment is not a 32-bit integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID";

/// Extractor for `i32` path ids.
///
/// Anything that does not parse (`abc`, `1.5`, ` 12`, values past
/// `i32::MAX`) is rejected with 400 `Invalid ID`.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        raw.parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.to_string()))
    }
}
