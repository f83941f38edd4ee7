//! Handlers for brand and type lookup endpoints.

use axum::{Json, extract::State};

use crate::api::dto::lookups::{LookupItem, LookupListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all catalog brands.
///
/// # Endpoint
///
/// `GET /api/catalog-brands`
pub async fn catalog_brands_handler(
    State(state): State<AppState>,
) -> Result<Json<LookupListResponse>, AppError> {
    let brands = state.lookup_service.list_brands().await?;

    Ok(Json(LookupListResponse {
        items: brands
            .into_iter()
            .map(|b| LookupItem {
                id: b.id,
                name: b.name,
            })
            .collect(),
    }))
}

/// Lists all catalog types.
///
/// # Endpoint
///
/// `GET /api/catalog-types`
pub async fn catalog_types_handler(
    State(state): State<AppState>,
) -> Result<Json<LookupListResponse>, AppError> {
    let types = state.lookup_service.list_types().await?;

    Ok(Json(LookupListResponse {
        items: types
            .into_iter()
            .map(|t| LookupItem {
                id: t.id,
                name: t.name,
            })
            .collect(),
    }))
}
