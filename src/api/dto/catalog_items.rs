//! DTOs for catalog item endpoints.

use serde::Serialize;

use crate::application::services::UriComposer;
use crate::domain::entities::CatalogItem;

/// Wire projection of a catalog item.
///
/// `picture_uri` is always the composed absolute URL; the raw stored
/// reference never crosses the API boundary. The DTO is built in one step
/// with the URI already resolved, so no partially decorated value is ever
/// observable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub picture_uri: String,
    pub brand_id: i64,
    pub type_id: i64,
}

impl CatalogItemDto {
    /// Projects an item into its wire shape, resolving the picture URI.
    pub fn from_item(item: &CatalogItem, uri_composer: &UriComposer) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            picture_uri: uri_composer.compose_pic_uri(&item.picture_reference),
            brand_id: item.brand_id,
            type_id: item.type_id,
        }
    }
}

/// Response body for `GET /api/catalog-items`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCatalogItemsResponse {
    pub correlation_id: String,
    pub catalog_items: Vec<CatalogItemDto>,
    pub page_count: i64,
}
