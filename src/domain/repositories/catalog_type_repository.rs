//! Repository trait for catalog types.

use crate::domain::entities::CatalogType;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the type lookup table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCatalogTypeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogTypeRepository: Send + Sync {
    /// Lists all types in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<CatalogType>, AppError>;
}
