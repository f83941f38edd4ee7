//! Repository trait for catalog brands.

use crate::domain::entities::CatalogBrand;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the brand lookup table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCatalogBrandRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogBrandRepository: Send + Sync {
    /// Lists all brands in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<CatalogBrand>, AppError>;
}
