//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CatalogItemRepository`] - Catalog item counting, paging, and lookup
//! - [`CatalogBrandRepository`] - Brand lookup table
//! - [`CatalogTypeRepository`] - Type lookup table

pub mod catalog_brand_repository;
pub mod catalog_item_repository;
pub mod catalog_type_repository;

pub use catalog_brand_repository::CatalogBrandRepository;
pub use catalog_item_repository::{CatalogFilter, CatalogItemRepository, PagedCatalogQuery};
pub use catalog_type_repository::CatalogTypeRepository;

#[cfg(test)]
pub use catalog_brand_repository::MockCatalogBrandRepository;
#[cfg(test)]
pub use catalog_item_repository::MockCatalogItemRepository;
#[cfg(test)]
pub use catalog_type_repository::MockCatalogTypeRepository;
