//! HTTP client tests against a local fixture server.
//!
//! Each test binds an axum router to an ephemeral port on 127.0.0.1 and
//! points an `HttpCatalogClient` at it.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use storefront_catalog::{
    fetch_catalog, CatalogConfig, CatalogError, CatalogProvider, HttpCatalogClient,
};
use storefront_core::ProductId;

fn fixture_products() -> Value {
    json!([
        {
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 9,
            "title": "WD 2TB Elements Portable External Hard Drive",
            "price": 64,
            "description": "USB 3.0 and USB 2.0 compatibility",
            "category": "electronics",
            "image": "https://example.com/9.jpg",
            "rating": { "rate": 3.3, "count": 203 }
        },
        {
            "id": 10,
            "title": "",
            "price": 109,
            "category": "electronics"
        },
        {
            "id": 11,
            "title": "Yacht",
            "price": 1e17,
            "category": "boats"
        }
    ])
}

fn fixture_categories() -> Value {
    json!(["electronics", "jewelery", "men's clothing", "women's clothing"])
}

/// Serves `router` on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fixture_router() -> Router {
    Router::new()
        .route("/products", get(|| async { Json(fixture_products()) }))
        .route("/products/categories", get(|| async { Json(fixture_categories()) }))
}

fn client_for(base_url: &str) -> HttpCatalogClient {
    HttpCatalogClient::new(CatalogConfig::with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_list_products_decodes_and_drops_invalid() {
    let base = serve(fixture_router()).await;
    let client = client_for(&base);

    let products = client.list_products().await.unwrap();

    let ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![ProductId::Number(1), ProductId::Number(9)]);
    assert_eq!(products[0].price.cents(), 10995);
    assert_eq!(products[1].price.cents(), 6400);
    assert_eq!(products[1].category, "electronics");
}

#[tokio::test]
async fn test_list_categories() {
    let base = serve(fixture_router()).await;
    let client = client_for(&base);

    let categories = client.list_categories().await.unwrap();
    assert_eq!(
        categories,
        vec!["electronics", "jewelery", "men's clothing", "women's clothing"]
    );
}

#[tokio::test]
async fn test_fetch_catalog_returns_both_lists() {
    let base = serve(fixture_router()).await;
    let client = client_for(&format!("{}/", base));

    let snapshot = fetch_catalog(&client).await.unwrap();
    assert_eq!(snapshot.products.len(), 2);
    assert_eq!(snapshot.categories.len(), 4);
}

#[tokio::test]
async fn test_fetch_catalog_under_base_path() {
    let base = serve(Router::new().nest("/api", fixture_router())).await;
    let client = client_for(&format!("{}/api/", base));

    let snapshot = fetch_catalog(&client).await.unwrap();
    assert_eq!(snapshot.products.len(), 2);
    assert_eq!(snapshot.categories.len(), 4);
}

#[tokio::test]
async fn test_fetch_catalog_fails_if_either_request_fails() {
    let router = Router::new()
        .route("/products", get(|| async { Json(fixture_products()) }))
        .route(
            "/products/categories",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
    let base = serve(router).await;
    let client = client_for(&base);

    let err = fetch_catalog(&client).await.unwrap_err();
    match err {
        CatalogError::UnexpectedStatus { endpoint, status } => {
            assert_eq!(endpoint, "products/categories");
            assert_eq!(status, 503);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let router = Router::new().route("/products", get(|| async { "not json" }));
    let base = serve(router).await;
    let client = client_for(&base);

    let err = client.list_products().await.unwrap_err();
    assert!(matches!(err, CatalogError::DecodeFailed(_)));
    assert!(!err.is_transport_error());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));

    let err = client.list_categories().await.unwrap_err();
    assert!(err.is_transport_error(), "got {err:?}");
}
