//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the product catalog. Entities are plain data structures without
//! business logic.
//!
//! # Entity Types
//!
//! - [`CatalogItem`] - A sellable product
//! - [`CatalogBrand`] - A brand items are classified by
//! - [`CatalogType`] - A product category items are classified by
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod catalog_brand;
pub mod catalog_item;
pub mod catalog_type;

pub use catalog_brand::CatalogBrand;
pub use catalog_item::CatalogItem;
pub use catalog_type::CatalogType;
