use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{MAX_PRICE, MAX_QUANTITY, Product, ProductInput, RESERVED_NAMES};
use crate::repository::ProductRepository;

/// Check the business rules for a candidate product.
///
/// Rules run in a fixed order and the first violation wins: reserved name,
/// then price ceiling, then quantity ceiling.
pub fn validate_business_rules(input: &ProductInput) -> ProductResult<()> {
    let name = input.name.to_lowercase();
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.to_lowercase() == name)
    {
        return Err(ProductError::NameReserved);
    }

    if input.price > MAX_PRICE {
        return Err(ProductError::PriceLimitExceeded);
    }

    if input.quantity > MAX_QUANTITY {
        return Err(ProductError::QuantityLimitExceeded);
    }

    Ok(())
}

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    fn check(input: &ProductInput) -> ProductResult<()> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(axum_helpers::errors::validation_message(&e)))?;
        validate_business_rules(input)
    }

    /// Validate and persist a new product, returning its id
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<i32> {
        Self::check(&input)?;
        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Validate and replace every field of an existing product
    #[instrument(skip(self, input), fields(product_id = id))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<()> {
        Self::check(&input)?;

        if !self.repository.update(id, input).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// Delete a product
    #[instrument(skip(self), fields(product_id = id))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// List every product
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn input(name: &str, price: i32, quantity: i32) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: "Test Description".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_reserved_names_are_case_insensitive() {
        for name in ["Sarkor", "sarkor", "SARKOR", "Sochnaya Dolina", "sochnaya dolina"] {
            assert!(
                matches!(
                    validate_business_rules(&input(name, 10, 1)),
                    Err(ProductError::NameReserved)
                ),
                "{name} should be reserved"
            );
        }
        assert!(validate_business_rules(&input("Sarkor Juice", 10, 1)).is_ok());
    }

    #[test]
    fn test_limits_are_inclusive() {
        assert!(validate_business_rules(&input("Widget", 10_000, 1_000)).is_ok());
        assert!(matches!(
            validate_business_rules(&input("Widget", 10_001, 1)),
            Err(ProductError::PriceLimitExceeded)
        ));
        assert!(matches!(
            validate_business_rules(&input("Widget", 1, 1_001)),
            Err(ProductError::QuantityLimitExceeded)
        ));
    }

    #[test]
    fn test_first_violation_wins() {
        assert!(matches!(
            validate_business_rules(&input("Sarkor", 20_000, 5_000)),
            Err(ProductError::NameReserved)
        ));
        assert!(matches!(
            validate_business_rules(&input("Widget", 20_000, 5_000)),
            Err(ProductError::PriceLimitExceeded)
        ));
    }

    #[tokio::test]
    async fn test_create_product_persists_valid_input() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .with(eq(input("Test Product", 5000, 10)))
            .times(1)
            .returning(|_| Ok(1));

        let service = ProductService::new(repo);
        assert_eq!(
            service
                .create_product(input("Test Product", 5000, 10))
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_create_product_rejects_before_persisting() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();
        let service = ProductService::new(repo);

        let err = service
            .create_product(input("Widget", 20_000, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::PriceLimitExceeded));

        let err = service.create_product(input("x", 10, 10)).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation(ref m) if m.contains("name")));
    }

    #[tokio::test]
    async fn test_update_product_applies_business_rules() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().never();
        let service = ProductService::new(repo);

        let err = service
            .update_product(1, input("sochnaya dolina", 10, 10))
            .await
            .unwrap_err();
        assert!(err.is_business_rule());
    }

    #[tokio::test]
    async fn test_update_product_missing_row_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update()
            .with(eq(404), eq(input("Widget", 10, 10)))
            .returning(|_, _| Ok(false));

        let service = ProductService::new(repo);
        let err = service
            .update_product(404, input("Widget", 10, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound(404)));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().with(eq(5)).returning(|_| Ok(None));

        let service = ProductService::new(repo);
        assert!(matches!(
            service.get_product(5).await,
            Err(ProductError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_delete_product_missing_row_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(false));

        let service = ProductService::new(repo);
        assert!(matches!(
            service.delete_product(3).await,
            Err(ProductError::NotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_store_errors_pass_through_unchanged() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|| Err(ProductError::Database("pool timed out".to_string())));

        let service = ProductService::new(repo);
        let err = service.list_products().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(ref m) if m == "pool timed out"));
        assert!(!err.is_business_rule());
    }
}
