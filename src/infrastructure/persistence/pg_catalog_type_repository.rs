//! PostgreSQL implementation of the type repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::CatalogType;
use crate::domain::repositories::CatalogTypeRepository;
use crate::error::AppError;

/// PostgreSQL repository for the type lookup table.
pub struct PgCatalogTypeRepository {
    pool: Arc<PgPool>,
}

impl PgCatalogTypeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogTypeRepository for PgCatalogTypeRepository {
    async fn list_all(&self) -> Result<Vec<CatalogType>, AppError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM catalog_types ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| CatalogType::new(id, name))
            .collect())
    }
}
