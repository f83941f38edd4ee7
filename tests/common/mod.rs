#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{Router, middleware, routing::get};
use chrono::Utc;
use serde_json::json;

use catalog_api::api::handlers::health_handler;
use catalog_api::api::middleware::request_id;
use catalog_api::api::routes::public_routes;
use catalog_api::application::services::{CatalogService, LookupService, UriComposer};
use catalog_api::domain::entities::{CatalogBrand, CatalogItem, CatalogType};
use catalog_api::domain::repositories::{
    CatalogBrandRepository, CatalogFilter, CatalogItemRepository, CatalogTypeRepository,
    PagedCatalogQuery,
};
use catalog_api::error::AppError;
use catalog_api::state::AppState;

pub const PICTURE_BASE_URL: &str = "https://cdn.example.com/images/";

pub fn test_item(id: i64, brand_id: i64, type_id: i64) -> CatalogItem {
    CatalogItem::new(
        id,
        format!("Item {id}"),
        1000 + id,
        format!("products/{id}.png"),
        brand_id,
        type_id,
        Utc::now(),
    )
}

/// `count` items with ids starting at `first_id`, all of one brand and type.
pub fn seed_items(first_id: i64, count: i64, brand_id: i64, type_id: i64) -> Vec<CatalogItem> {
    (first_id..first_id + count)
        .map(|id| test_item(id, brand_id, type_id))
        .collect()
}

/// In-memory stand-in for the Postgres item repository.
///
/// Applies the same semantics the SQL implementation guarantees: the filter
/// is an optional equality predicate on both axes, pages are windows of the
/// matching set in ascending id order. Failure flags and call counters let
/// tests exercise the error path and assert the count/fetch short-circuit.
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
    pub fail_count: AtomicBool,
    pub fail_list: AtomicBool,
    pub count_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub last_count_filter: Mutex<Option<CatalogFilter>>,
    pub last_list_filter: Mutex<Option<CatalogFilter>>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            fail_count: AtomicBool::new(false),
            fail_list: AtomicBool::new(false),
            count_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            last_count_filter: Mutex::new(None),
            last_list_filter: Mutex::new(None),
        }
    }

    fn matching(&self, filter: &CatalogFilter) -> Vec<CatalogItem> {
        let mut matching: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|i| filter.matches(i.brand_id, i.type_id))
            .cloned()
            .collect();
        matching.sort_by_key(|i| i.id);
        matching
    }
}

#[async_trait]
impl CatalogItemRepository for InMemoryCatalog {
    async fn count(&self, filter: &CatalogFilter) -> Result<i64, AppError> {
        if self.fail_count.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_count_filter.lock().unwrap() = Some(filter.clone());

        Ok(self.matching(filter).len() as i64)
    }

    async fn list(&self, query: &PagedCatalogQuery) -> Result<Vec<CatalogItem>, AppError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_list_filter.lock().unwrap() = Some(query.filter.clone());

        Ok(self
            .matching(&query.filter)
            .into_iter()
            .skip(usize::try_from(query.skip).unwrap_or(0))
            .take(usize::try_from(query.take).unwrap_or(0))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CatalogItem>, AppError> {
        Ok(self.items.iter().find(|i| i.id == id).cloned())
    }
}

pub struct InMemoryBrands {
    brands: Vec<CatalogBrand>,
    pub fail: AtomicBool,
}

impl InMemoryBrands {
    pub fn new(brands: Vec<CatalogBrand>) -> Self {
        Self {
            brands,
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl CatalogBrandRepository for InMemoryBrands {
    async fn list_all(&self) -> Result<Vec<CatalogBrand>, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(self.brands.clone())
    }
}

pub struct InMemoryTypes {
    types: Vec<CatalogType>,
}

impl InMemoryTypes {
    pub fn new(types: Vec<CatalogType>) -> Self {
        Self { types }
    }
}

#[async_trait]
impl CatalogTypeRepository for InMemoryTypes {
    async fn list_all(&self) -> Result<Vec<CatalogType>, AppError> {
        Ok(self.types.clone())
    }
}

pub fn create_test_state(
    catalog: Arc<InMemoryCatalog>,
    brands: Arc<InMemoryBrands>,
    types: Arc<InMemoryTypes>,
) -> AppState {
    AppState::new(
        Arc::new(CatalogService::new(catalog)),
        Arc::new(LookupService::new(brands, types)),
        Arc::new(UriComposer::new(PICTURE_BASE_URL)),
    )
}

pub fn create_state_with_items(items: Vec<CatalogItem>) -> (AppState, Arc<InMemoryCatalog>) {
    let catalog = Arc::new(InMemoryCatalog::new(items));
    let state = create_test_state(
        catalog.clone(),
        Arc::new(InMemoryBrands::new(vec![
            CatalogBrand::new(1, "Daybird".to_string()),
            CatalogBrand::new(2, "Gravitate".to_string()),
        ])),
        Arc::new(InMemoryTypes::new(vec![
            CatalogType::new(1, "Footwear".to_string()),
            CatalogType::new(2, "Climbing".to_string()),
        ])),
    );
    (state, catalog)
}

/// The application router as served in production, minus the rate limiter
/// (it needs peer socket info the in-process test transport does not have).
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", public_routes())
        .with_state(state)
        .layer(middleware::from_fn(request_id::layer))
}
