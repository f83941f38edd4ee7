//! DTOs for brand and type lookup endpoints.

use serde::Serialize;

/// A single entry of a lookup table (brand or type).
#[derive(Debug, Serialize)]
pub struct LookupItem {
    pub id: i64,
    pub name: String,
}

/// Response body for `GET /api/catalog-brands` and `GET /api/catalog-types`.
#[derive(Debug, Serialize)]
pub struct LookupListResponse {
    pub items: Vec<LookupItem>,
}
