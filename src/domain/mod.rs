//! Domain layer containing business entities and query contracts.
//!
//! This module implements the core domain model following Clean Architecture
//! principles. It defines entities and repository interfaces independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions and query types
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Filter and page-window values ([`repositories::CatalogFilter`],
//!   [`repositories::PagedCatalogQuery`]) are plain data, decoupled from SQL

pub mod entities;
pub mod repositories;
