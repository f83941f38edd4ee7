//! Catalog item listing and lookup service.

use std::sync::Arc;

use crate::domain::entities::CatalogItem;
use crate::domain::repositories::{CatalogFilter, CatalogItemRepository, PagedCatalogQuery};
use crate::error::AppError;
use serde_json::json;

/// Service for querying the product catalog.
///
/// Thin orchestration over the item repository: the listing handler issues a
/// count and a page fetch through it, single-item lookup maps a missing row
/// to a not-found error.
pub struct CatalogService {
    repository: Arc<dyn CatalogItemRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<dyn CatalogItemRepository>) -> Self {
        Self { repository }
    }

    /// Counts the items matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_items(&self, filter: &CatalogFilter) -> Result<i64, AppError> {
        self.repository.count(filter).await
    }

    /// Fetches one page of items matching the query's filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_items(&self, query: &PagedCatalogQuery) -> Result<Vec<CatalogItem>, AppError> {
        self.repository.list(query).await
    }

    /// Retrieves a single item by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_item(&self, id: i64) -> Result<CatalogItem, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Catalog item not found", json!({ "id": id })))
    }
}
