//! Business logic services for the application layer.

pub mod catalog_service;
pub mod lookup_service;
pub mod uri_composer;

pub use catalog_service::CatalogService;
pub use lookup_service::LookupService;
pub use uri_composer::UriComposer;
