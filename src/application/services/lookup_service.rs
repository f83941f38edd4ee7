//! Brand and type lookup service.

use std::sync::Arc;

use crate::domain::entities::{CatalogBrand, CatalogType};
use crate::domain::repositories::{CatalogBrandRepository, CatalogTypeRepository};
use crate::error::AppError;

/// Service exposing the filter vocabulary of the catalog.
///
/// Brands and types are small lookup tables read in full; the listing
/// endpoint's `catalogBrandId` / `catalogTypeId` parameters refer to their
/// ids.
pub struct LookupService {
    brand_repository: Arc<dyn CatalogBrandRepository>,
    type_repository: Arc<dyn CatalogTypeRepository>,
}

impl LookupService {
    /// Creates a new lookup service.
    pub fn new(
        brand_repository: Arc<dyn CatalogBrandRepository>,
        type_repository: Arc<dyn CatalogTypeRepository>,
    ) -> Self {
        Self {
            brand_repository,
            type_repository,
        }
    }

    /// Lists all catalog brands.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_brands(&self) -> Result<Vec<CatalogBrand>, AppError> {
        self.brand_repository.list_all().await
    }

    /// Lists all catalog types.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_types(&self) -> Result<Vec<CatalogType>, AppError> {
        self.type_repository.list_all().await
    }
}
