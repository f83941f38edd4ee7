//! HTTP request handlers for API endpoints.

pub mod catalog_items;
pub mod health;
pub mod lookups;

pub use catalog_items::{get_catalog_item_handler, list_catalog_items_handler};
pub use health::health_handler;
pub use lookups::{catalog_brands_handler, catalog_types_handler};
