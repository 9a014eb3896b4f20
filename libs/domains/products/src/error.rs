use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Message sent for any read, update or delete of an unknown id.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("product name is reserved")]
    NameReserved,

    #[error("price exceeds maximum allowed value of $10,000")]
    PriceLimitExceeded,

    #[error("quantity exceeds maximum allowed value of 1000 units")]
    QuantityLimitExceeded,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl ProductError {
    /// True for violations of the product business rules, which are the
    /// caller's fault and reported as 400 with the rule message.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            ProductError::NameReserved
                | ProductError::PriceLimitExceeded
                | ProductError::QuantityLimitExceeded
        )
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            e @ (ProductError::NameReserved
            | ProductError::PriceLimitExceeded
            | ProductError::QuantityLimitExceeded) => AppError::BadRequest(e.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}
