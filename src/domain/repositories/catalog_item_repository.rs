//! Repository trait and query types for catalog items.

use crate::domain::entities::CatalogItem;
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for catalog item queries.
///
/// Both fields are optional equality filters; an absent field matches every
/// record. The same value is used for the count query and the page fetch of
/// one listing request, so the two queries always describe the same
/// population ([`PagedCatalogQuery`] embeds it rather than copying fields).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    pub brand_id: Option<i64>,
    pub type_id: Option<i64>,
}

impl CatalogFilter {
    /// Creates a filter from optional brand and type ids.
    pub fn new(brand_id: Option<i64>, type_id: Option<i64>) -> Self {
        Self { brand_id, type_id }
    }

    /// Returns true when the record's classification satisfies the filter.
    pub fn matches(&self, brand_id: i64, type_id: i64) -> bool {
        self.brand_id.is_none_or(|b| b == brand_id) && self.type_id.is_none_or(|t| t == type_id)
    }
}

/// One page window over the records matching a [`CatalogFilter`].
///
/// `skip`/`take` select a contiguous window of the matching set in the
/// repository's stable order (ascending item id). The window is always
/// derived from pagination input, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedCatalogQuery {
    pub filter: CatalogFilter,
    pub skip: i64,
    pub take: i64,
}

impl PagedCatalogQuery {
    /// Creates a query from an explicit window.
    pub fn new(skip: i64, take: i64, filter: CatalogFilter) -> Self {
        Self { filter, skip, take }
    }

    /// Derives the window for a zero-based page: `skip = page_index * page_size`,
    /// `take = page_size`.
    ///
    /// A `page_size` of 0 yields an empty page. The multiplication is done in
    /// `i64`, so it cannot overflow for any pair of `u32` inputs.
    pub fn for_page(page_index: u32, page_size: u32, filter: CatalogFilter) -> Self {
        Self::new(
            i64::from(page_index) * i64::from(page_size),
            i64::from(page_size),
            filter,
        )
    }
}

/// Repository interface for catalog item queries.
///
/// The listing flow issues a count and a page fetch against the same filter;
/// implementations must apply an ordering that is deterministic across both
/// calls of one request.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCatalogItemRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogItemRepository: Send + Sync {
    /// Counts the records matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, filter: &CatalogFilter) -> Result<i64, AppError>;

    /// Fetches one page of matching records in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, query: &PagedCatalogQuery) -> Result<Vec<CatalogItem>, AppError>;

    /// Looks up a single item by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(item))` if the item exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<CatalogItem>, AppError>;
}
