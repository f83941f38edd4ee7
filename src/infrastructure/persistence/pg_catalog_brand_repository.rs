//! PostgreSQL implementation of the brand repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::CatalogBrand;
use crate::domain::repositories::CatalogBrandRepository;
use crate::error::AppError;

/// PostgreSQL repository for the brand lookup table.
pub struct PgCatalogBrandRepository {
    pool: Arc<PgPool>,
}

impl PgCatalogBrandRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogBrandRepository for PgCatalogBrandRepository {
    async fn list_all(&self) -> Result<Vec<CatalogBrand>, AppError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM catalog_brands ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| CatalogBrand::new(id, name))
            .collect())
    }
}
