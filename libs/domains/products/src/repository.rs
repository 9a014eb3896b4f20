use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
///
/// Absence is reported through the return value (`None` / `false`) and
/// turned into `ProductError::NotFound` by the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return its store-assigned id
    async fn create(&self, input: ProductInput) -> ProductResult<i32>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Replace every mutable field. Returns whether a row matched.
    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<bool>;

    /// Delete a product by ID. Returns whether a row matched.
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// All products ordered by id
    async fn list(&self) -> ProductResult<Vec<Product>>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused, mirroring a SERIAL column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<i32> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = store.next_id;
        store.products.insert(id, Product::from_input(id, input));

        tracing::info!(product_id = id, "Created product");
        Ok(id)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<bool> {
        let mut store = self.store.write().await;
        match store.products.get_mut(&id) {
            Some(product) => {
                *product = Product::from_input(id, input);
                tracing::info!(product_id = id, "Updated product");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }
}
