mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum_test::TestServer;
use serde_json::Value;

use catalog_api::domain::entities::CatalogBrand;
use common::{InMemoryBrands, InMemoryCatalog, InMemoryTypes, create_test_state, test_app};

fn health_state() -> (catalog_api::AppState, Arc<InMemoryBrands>) {
    let brands = Arc::new(InMemoryBrands::new(vec![CatalogBrand::new(
        1,
        "Daybird".to_string(),
    )]));
    let state = create_test_state(
        Arc::new(InMemoryCatalog::new(vec![])),
        brands.clone(),
        Arc::new(InMemoryTypes::new(vec![])),
    );
    (state, brands)
}

#[tokio::test]
async fn test_health_ok() {
    let (state, _) = health_state();
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json["version"].as_str().is_some());
}

#[tokio::test]
async fn test_health_degraded_when_database_fails() {
    let (state, brands) = health_state();
    brands.fail.store(true, Ordering::SeqCst);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
