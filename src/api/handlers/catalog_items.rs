//! Handlers for catalog item endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::catalog_items::{CatalogItemDto, ListCatalogItemsResponse};
use crate::api::dto::pagination::{ListingParams, page_count};
use crate::api::middleware::request_id::RequestId;
use crate::domain::repositories::{CatalogFilter, PagedCatalogQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists one page of catalog items.
///
/// # Endpoint
///
/// `GET /api/catalog-items`
///
/// # Query Parameters
///
/// - `pageIndex` (optional): Zero-based page number (default: 0)
/// - `pageSize` (optional): Items per page (default: 10, max: 1000; 0 yields an empty page)
/// - `catalogBrandId` (optional): Only items of this brand
/// - `catalogTypeId` (optional): Only items of this type
///
/// # Response
///
/// `{ correlationId, catalogItems, pageCount }`, with every `pictureUri`
/// resolved to an absolute URL.
///
/// # Consistency
///
/// The count and the page fetch run sequentially against the same filter
/// value, so both describe the same population within one request. Catalog
/// writes landing between the two calls can make `pageCount` lag the exact
/// set fetched; that window is accepted and not compensated for.
///
/// # Errors
///
/// Returns 400 Bad Request if `pageSize` exceeds the cap.
/// Returns 500 Internal Server Error on storage failures; no partial
/// response is produced.
pub async fn list_catalog_items_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListCatalogItemsResponse>, AppError> {
    params.validate()?;

    let page_index = params.page_index();
    let page_size = params.page_size();

    let filter = CatalogFilter::new(params.catalog_brand_id, params.catalog_type_id);

    let total_items = state.catalog_service.count_items(&filter).await?;
    tracing::info!(total_items, "Counted matching catalog items");

    let query = PagedCatalogQuery::for_page(page_index, page_size, filter);
    let items = state.catalog_service.list_items(&query).await?;
    tracing::info!(returned = items.len(), "Fetched catalog page");

    let catalog_items = items
        .iter()
        .map(|item| CatalogItemDto::from_item(item, &state.uri_composer))
        .collect();

    Ok(Json(ListCatalogItemsResponse {
        correlation_id: request_id.0,
        catalog_items,
        page_count: page_count(total_items, page_size),
    }))
}

/// Retrieves a single catalog item by id.
///
/// # Endpoint
///
/// `GET /api/catalog-items/{id}`
///
/// # Errors
///
/// Returns 404 if no item has the given id.
pub async fn get_catalog_item_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CatalogItemDto>, AppError> {
    let item = state.catalog_service.get_item(id).await?;

    Ok(Json(CatalogItemDto::from_item(&item, &state.uri_composer)))
}
