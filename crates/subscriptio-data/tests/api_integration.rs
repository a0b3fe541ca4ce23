//! Integration tests for the storefront API client
//!
//! These tests use wiremock to stand in for the storefront's endpoints and
//! exercise the full request/response cycle for every read.

use serde_json::json;
use subscriptio_data::prelude::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), format!("{}/catalog", server.uri()))
}

// =============================================================================
// Successful Reads
// =============================================================================

#[tokio::test]
async fn test_invoices_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "inv_1",
                "date": "2024-02-01",
                "amount": 12.5,
                "status": "paid",
                "downloadUrl": "https://files.example.com/inv_1.pdf"
            },
            {
                "id": 2,
                "date": "2024-03-01",
                "amount": 12.5,
                "status": "open",
                "downloadUrl": "https://files.example.com/inv_2.pdf"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let invoices = client_for(&server).invoices().await.unwrap();

    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0].amount().to_string(), "$12.50");
    assert_eq!(invoices[1].id, "2");
    assert_eq!(invoices[1].status, "open");
}

#[tokio::test]
async fn test_empty_invoice_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let invoices = client_for(&server).invoices().await.unwrap();
    assert!(invoices.is_empty());
}

#[tokio::test]
async fn test_subscription_products_sends_type_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("type", "subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "coffee", "name": "Coffee Club", "price": 15.0, "interval": "month" },
            { "id": "tea", "name": "Tea Box" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server).subscription_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price_label().as_deref(), Some("$15.00 / month"));
    assert!(products[1].price.is_none());
}

#[tokio::test]
async fn test_product_detail_uses_catalogue_base() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "name": "Wireless Mouse",
            "description": "A mouse without the tail.",
            "image": "/img/mouse.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = client_for(&server).product("42").await.unwrap();

    assert_eq!(product.id, "42");
    assert_eq!(product.name, "Wireless Mouse");
}

#[tokio::test]
async fn test_cart_total_falls_back_to_lines() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "productId": "coffee", "name": "Coffee Club", "price": 15.0, "quantity": 2 }
            ]
        })))
        .mount(&server)
        .await;

    let cart = client_for(&server).cart().await.unwrap();

    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total().map(|t| t.to_string()).as_deref(), Some("$30.00"));
}

#[tokio::test]
async fn test_profile_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profile": { "name": "Ada", "email": "ada@example.com", "memberSince": "2021-06-01" },
            "subscriptions": [
                { "id": "s1", "name": "Coffee Club", "status": "active", "nextBillingDate": "2024-07-01" }
            ]
        })))
        .mount(&server)
        .await;

    let data = client_for(&server).profile().await.unwrap();

    assert_eq!(data.profile.email, "ada@example.com");
    assert_eq!(data.subscriptions.len(), 1);
    assert_eq!(data.subscriptions[0].next_billing_date.as_deref(), Some("2024-07-01"));
}

#[tokio::test]
async fn test_default_header_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .and(header("x-storefront", "web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let cart = client_for(&server)
        .with_default_header("x-storefront", "web")
        .cart()
        .await
        .unwrap();
    assert!(cart.is_empty());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_server_error_maps_to_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/invoices"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).invoices().await.unwrap_err();

    assert_eq!(
        err,
        FetchError::Http {
            status: 503,
            message: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_product_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog/products/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).product("999").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).profile().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client.cart().await.unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}
