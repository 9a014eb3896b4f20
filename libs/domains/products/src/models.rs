use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Names that may not be used for products, compared case-insensitively.
pub const RESERVED_NAMES: [&str; 2] = ["Sarkor", "Sochnaya Dolina"];

/// Highest price a product may carry, in whole currency units.
pub const MAX_PRICE: i32 = 10_000;

/// Highest stock quantity a product may carry.
pub const MAX_QUANTITY: i32 = 1_000;

/// A product in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name (2-255 characters)
    #[schema(example = "Test Product")]
    pub name: String,
    /// Free-form description (1-1000 characters)
    #[schema(example = "Test Description")]
    pub description: String,
    /// Unit price, strictly positive
    #[schema(example = 5000)]
    pub price: i32,
    /// Units in stock, zero or more
    #[schema(example = 10)]
    pub quantity: i32,
}

impl Product {
    pub fn from_input(id: i32, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
        }
    }
}

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Every field is required; updates replace all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(length(min = 2, max = 255, message = "must be between 2 and 255 characters"))]
    #[schema(example = "Test Product", min_length = 2, max_length = 255)]
    pub name: String,

    #[validate(length(min = 1, max = 1000, message = "must be between 1 and 1000 characters"))]
    #[schema(example = "Test Description", min_length = 1, max_length = 1000)]
    pub description: String,

    #[validate(range(min = 1, message = "must be greater than 0"))]
    #[schema(example = 5000, minimum = 1)]
    pub price: i32,

    #[validate(range(min = 0, message = "must not be negative"))]
    #[schema(example = 10, minimum = 0)]
    pub quantity: i32,
}
