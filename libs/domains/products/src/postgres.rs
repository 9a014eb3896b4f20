use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{Product, ProductInput},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository over a pooled SeaORM connection
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<i32> {
        let active_model: entity::ActiveModel = input.into();

        let result = entity::Entity::insert(active_model).exec(&self.db).await?;

        tracing::info!(product_id = result.last_insert_id, "Created product");
        Ok(result.last_insert_id)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<bool> {
        let active_model: entity::ActiveModel = input.into();

        let result = entity::Entity::update_many()
            .set(active_model)
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Updated product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            description: "Test Description".to_string(),
            price: 5000,
            quantity: 10,
        }
    }

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: "Test Description".to_string(),
            price: 5000,
            quantity: 10,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(15, "Test Product")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 15,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert_eq!(repo.create(input("Test Product")).await.unwrap(), 15);
    }

    #[tokio::test]
    async fn test_get_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "Widget")], vec![]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.get_by_id(7).await.unwrap().unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Widget");

        assert!(repo.get_by_id(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_reports_whether_a_row_matched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.update(1, input("Renamed")).await.unwrap());
        assert!(!repo.update(99, input("Renamed")).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_matched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "First"), model(2, "Second")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_store_failure_becomes_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(ref m) if m.contains("connection reset")));
    }
}
