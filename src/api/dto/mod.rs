//! Data Transfer Objects for API request/response serialization.

pub mod catalog_items;
pub mod health;
pub mod lookups;
pub mod pagination;
