//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{CatalogService, LookupService, UriComposer};

/// Application state shared across all request handlers.
///
/// Holds the services and the URI composer behind `Arc`, so cloning per
/// request is cheap. The state carries no per-request data; handlers are
/// stateless and safe to run concurrently.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub lookup_service: Arc<LookupService>,
    pub uri_composer: Arc<UriComposer>,
}

impl AppState {
    /// Creates application state from its collaborators.
    pub fn new(
        catalog_service: Arc<CatalogService>,
        lookup_service: Arc<LookupService>,
        uri_composer: Arc<UriComposer>,
    ) -> Self {
        Self {
            catalog_service,
            lookup_service,
            uri_composer,
        }
    }
}
