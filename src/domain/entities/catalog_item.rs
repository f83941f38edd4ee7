//! Catalog item entity: a single sellable product.

use chrono::{DateTime, Utc};

/// A product in the catalog, classified by brand and type.
///
/// `picture_reference` holds the stored form of the product picture location,
/// usually a path relative to the configured picture base URL. It is resolved
/// to an absolute URL only at the API boundary, never in storage.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    /// Price in minor currency units (cents).
    pub price: i64,
    pub picture_reference: String,
    pub brand_id: i64,
    pub type_id: i64,
    pub created_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Creates a new CatalogItem instance.
    pub fn new(
        id: i64,
        name: String,
        price: i64,
        picture_reference: String,
        brand_id: i64,
        type_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            picture_reference,
            brand_id,
            type_id,
            created_at,
        }
    }
}
