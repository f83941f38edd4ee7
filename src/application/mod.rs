//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and URI composition. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Item counting, paging, and lookup
//! - [`services::lookup_service::LookupService`] - Brand and type vocabulary
//! - [`services::uri_composer::UriComposer`] - Picture reference resolution

pub mod services;
