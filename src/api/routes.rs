//! API route configuration.

use crate::api::handlers::{
    catalog_brands_handler, catalog_types_handler, get_catalog_item_handler,
    list_catalog_items_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes. The catalog is a public, read-only surface.
///
/// # Endpoints
///
/// - `GET /catalog-items`        - Paginated, filterable item listing
/// - `GET /catalog-items/{id}`   - Single item lookup
/// - `GET /catalog-brands`       - Brand filter vocabulary
/// - `GET /catalog-types`        - Type filter vocabulary
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog-items", get(list_catalog_items_handler))
        .route("/catalog-items/{id}", get(get_catalog_item_handler))
        .route("/catalog-brands", get(catalog_brands_handler))
        .route("/catalog-types", get(catalog_types_handler))
}
