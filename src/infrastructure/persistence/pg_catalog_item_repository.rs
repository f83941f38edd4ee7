//! PostgreSQL implementation of the catalog item repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::CatalogItem;
use crate::domain::repositories::{CatalogFilter, CatalogItemRepository, PagedCatalogQuery};
use crate::error::AppError;

/// One SQL predicate shared by the count and the page fetch.
///
/// `$1` / `$2` bind the optional brand and type ids; a NULL bind disables that
/// axis of the filter. Both queries are built from this constant, so they can
/// never disagree about which records match.
const FILTER_PREDICATE: &str =
    "($1::bigint IS NULL OR brand_id = $1) AND ($2::bigint IS NULL OR type_id = $2)";

#[derive(sqlx::FromRow)]
struct CatalogItemRow {
    id: i64,
    name: String,
    price: i64,
    picture_reference: String,
    brand_id: i64,
    type_id: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CatalogItemRow> for CatalogItem {
    fn from(row: CatalogItemRow) -> Self {
        CatalogItem::new(
            row.id,
            row.name,
            row.price,
            row.picture_reference,
            row.brand_id,
            row.type_id,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for catalog items.
///
/// Pages are selected in ascending id order, which is stable across the
/// count and fetch round-trips of one listing request.
pub struct PgCatalogItemRepository {
    pool: Arc<PgPool>,
}

impl PgCatalogItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogItemRepository for PgCatalogItemRepository {
    async fn count(&self, filter: &CatalogFilter) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM catalog_items WHERE {FILTER_PREDICATE}");

        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(filter.brand_id)
            .bind(filter.type_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list(&self, query: &PagedCatalogQuery) -> Result<Vec<CatalogItem>, AppError> {
        let sql = format!(
            r#"
            SELECT id, name, price, picture_reference, brand_id, type_id, created_at
            FROM catalog_items
            WHERE {FILTER_PREDICATE}
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#
        );

        let rows: Vec<CatalogItemRow> = sqlx::query_as(&sql)
            .bind(query.filter.brand_id)
            .bind(query.filter.type_id)
            .bind(query.take)
            .bind(query.skip)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(CatalogItem::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CatalogItem>, AppError> {
        let row: Option<CatalogItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, picture_reference, brand_id, type_id, created_at
            FROM catalog_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CatalogItem::from))
    }
}
