//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries; the optional listing filters become NULL-tolerant
//! binds rather than dynamically assembled SQL.
//!
//! # Repositories
//!
//! - [`PgCatalogItemRepository`] - Item counting, paging, and lookup
//! - [`PgCatalogBrandRepository`] - Brand lookup table
//! - [`PgCatalogTypeRepository`] - Type lookup table

pub mod pg_catalog_brand_repository;
pub mod pg_catalog_item_repository;
pub mod pg_catalog_type_repository;

pub use pg_catalog_brand_repository::PgCatalogBrandRepository;
pub use pg_catalog_item_repository::PgCatalogItemRepository;
pub use pg_catalog_type_repository::PgCatalogTypeRepository;
