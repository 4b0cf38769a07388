//! Integration tests for the HTTP layer against a mock backend.
//!
//! Covers the header policy, session handling, error mapping and the
//! decoding of paginated envelopes.

mod common;

use std::sync::Arc;

use common::{page_body, MockBackend, MockResponse};
use serde_json::json;
use vela_client::{Api, ApiConfig, MemorySession, Session};
use vela_core::{
    BulkStatusUpdateRequest, CreateProductRequest, CustomerIdentifyRequest, LoginRequest,
    OrderStatus, ProductFilters,
};

fn api_for(backend: &MockBackend, session: Arc<MemorySession>) -> Api {
    let config = ApiConfig::from_env_or(Some(backend.base_url()), Some("1".to_string()));
    Api::new(config, session).expect("client should build")
}

fn product_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "tenant_id": 1,
        "name": name,
        "price": 4.5,
        "is_active": true,
    })
}

fn user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "tenant_id": 1,
        "name": "Ana",
        "email": "ana@example.com",
        "role": "tenant_owner",
        "is_active": true,
    })
}

// =============================================================================
// Header policy
// =============================================================================

#[tokio::test]
async fn test_get_sends_tenant_and_accept_headers() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::shared());

    backend
        .enqueue(MockResponse::json(page_body(json!([]), 1, 1, 10, 0)))
        .await;
    api.products()
        .list(&ProductFilters::default())
        .await
        .expect("list should succeed");

    let request = backend.last_request().await;
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/products");
    assert_eq!(request.header("x-tenant-id"), Some("1"));
    assert_eq!(request.header("accept"), Some("application/json"));
    // Logged out: no bearer token, and GETs never carry idempotency keys
    assert!(request.header("authorization").is_none());
    assert!(request.header("idempotency-key").is_none());
}

#[tokio::test]
async fn test_post_carries_bearer_and_fresh_idempotency_key() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok-abc"));

    let create = CreateProductRequest {
        name: "Espresso".to_string(),
        price: 4.5,
        ..Default::default()
    };
    backend
        .enqueue(MockResponse::json(product_json(1, "Espresso")))
        .await;
    backend
        .enqueue(MockResponse::json(product_json(2, "Espresso")))
        .await;
    api.products().create(&create).await.expect("first create");
    api.products().create(&create).await.expect("second create");

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 2);

    let first_key = requests[0].header("idempotency-key").expect("key on POST");
    let second_key = requests[1].header("idempotency-key").expect("key on POST");
    // UUID v4 text form, and a new key per request
    assert_eq!(first_key.len(), 36);
    assert_ne!(first_key, second_key);
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok-abc"));
}

#[tokio::test]
async fn test_filters_become_query_parameters() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::shared());

    let filters = ProductFilters {
        search: Some("coffee".to_string()),
        category_id: Some(3),
        page: Some(2),
        per_page: Some(20),
        ..Default::default()
    };
    backend
        .enqueue(MockResponse::json(page_body(json!([]), 2, 5, 20, 95)))
        .await;
    api.products().list(&filters).await.expect("list");

    let request = backend.last_request().await;
    assert!(request.query.contains("search=coffee"));
    assert!(request.query.contains("category_id=3"));
    assert!(request.query.contains("page=2"));
    assert!(request.query.contains("per_page=20"));
}

// =============================================================================
// Session lifecycle
// =============================================================================

#[tokio::test]
async fn test_login_stores_token_and_role() {
    let backend = MockBackend::start().await;
    let session = MemorySession::shared();
    let api = api_for(&backend, session.clone());

    backend
        .enqueue(MockResponse::json(json!({
            "user": user_json(),
            "token": "tok-xyz",
        })))
        .await;

    let credentials = LoginRequest {
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
    };
    let response = api.auth().login(&credentials).await.expect("login");

    assert_eq!(response.token, "tok-xyz");
    assert_eq!(session.token().as_deref(), Some("tok-xyz"));
    assert_eq!(session.role().as_deref(), Some("tenant_owner"));
    assert!(api.auth().is_authenticated());
}

#[tokio::test]
async fn test_unauthorized_response_clears_token() {
    let backend = MockBackend::start().await;
    let session = MemorySession::with_token("stale-token");
    let api = api_for(&backend, session.clone());

    backend
        .enqueue(MockResponse::error(401, "Unauthenticated."))
        .await;
    let error = api.auth().me().await.expect_err("401 should error");

    assert!(error.is_unauthorized());
    assert_eq!(
        error.to_string(),
        "Your session has expired. Please log in again."
    );
    // The dead token is dropped so later requests go out anonymous
    assert!(session.token().is_none());
}

#[tokio::test]
async fn test_logout_clears_session_even_on_backend_error() {
    let backend = MockBackend::start().await;
    let session = MemorySession::with_token("tok-abc");
    let api = api_for(&backend, session.clone());

    backend.enqueue(MockResponse::error(500, "boom")).await;
    let _ = api.auth().logout().await;

    assert!(session.token().is_none());
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn test_validation_error_surfaces_first_field_message() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::shared());

    backend
        .enqueue(MockResponse::validation(json!({
            "email": ["The email has already been taken."],
            "name": ["The name field is required."],
        })))
        .await;

    let create = CreateProductRequest {
        name: "".to_string(),
        price: 0.0,
        ..Default::default()
    };
    let error = api
        .products()
        .create(&create)
        .await
        .expect_err("422 should error");

    assert_eq!(error.status(), Some(422));
    assert_eq!(error.to_string(), "The email has already been taken.");
    assert_eq!(error.field_errors().map(|e| e.len()), Some(2));
}

#[tokio::test]
async fn test_not_found_maps_to_friendly_message() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::shared());

    backend
        .enqueue(MockResponse::error(404, "No query results."))
        .await;
    let error = api.products().get(999).await.expect_err("404");
    assert_eq!(error.to_string(), "The requested resource was not found.");
}

// =============================================================================
// Decoding
// =============================================================================

#[tokio::test]
async fn test_list_decodes_page_envelope() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::shared());

    let data = json!([product_json(1, "Espresso"), product_json(2, "Latte")]);
    backend
        .enqueue(MockResponse::json(page_body(data, 1, 5, 20, 95)))
        .await;

    let page = api
        .products()
        .list(&ProductFilters::default())
        .await
        .expect("list");

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].name, "Espresso");
    assert_eq!(page.current_page, 1);
    assert_eq!(page.last_page, 5);
    assert_eq!(page.total, 95);
    assert!(page.has_more());
}

#[tokio::test]
async fn test_order_cancel_sends_status_body() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok"));

    backend
        .enqueue(MockResponse::json(json!({
            "id": 7,
            "tenant_id": 1,
            "order_number": "ORD-2025-00007",
            "status": "cancelled",
            "subtotal": 90.0,
            "total_amount": 95.0,
            "customer_id": 12,
            "created_at": "2025-05-01T12:00:00Z",
            "updated_at": "2025-05-01T12:05:00Z",
        })))
        .await;

    let order = api.orders().cancel(7).await.expect("cancel");
    assert_eq!(order.status, OrderStatus::Cancelled);

    let request = backend.last_request().await;
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/orders/7");
    assert_eq!(request.json_body(), json!({ "status": "cancelled" }));
}

#[tokio::test]
async fn test_bulk_status_update_reports_partial_failure() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok"));

    backend
        .enqueue(MockResponse::json(json!({
            "message": "Processed 3 orders.",
            "updated_count": 2,
            "failed_count": 1,
            "updated_orders": [
                { "id": 1, "order_number": "ORD-1", "status": "confirmed" },
                { "id": 2, "order_number": "ORD-2", "status": "confirmed" },
            ],
            "failed_orders": [
                { "id": 3, "error": "Order already delivered." },
            ],
        })))
        .await;

    let request = BulkStatusUpdateRequest {
        order_ids: vec![1, 2, 3],
        status: OrderStatus::Confirmed,
        notes: None,
    };
    let response = api
        .orders()
        .bulk_update_status(&request)
        .await
        .expect("bulk update");

    assert_eq!(response.updated_count, 2);
    assert_eq!(response.failed_count, 1);
    assert_eq!(response.failed_orders[0].error, "Order already delivered.");
}

#[tokio::test]
async fn test_identify_returns_new_flag() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok"));

    backend
        .enqueue(MockResponse::json(json!({
            "customer": {
                "id": 31,
                "tenant_id": 1,
                "name": "Walk-in",
                "is_active": true,
            },
            "is_new": true,
        })))
        .await;

    let request = CustomerIdentifyRequest {
        phone: "+5511999990000".to_string(),
        name: None,
        email: None,
    };
    let response = api.customers().identify(&request).await.expect("identify");
    assert!(response.is_new);
    assert_eq!(response.customer.id, 31);
}

#[tokio::test]
async fn test_partial_update_goes_out_as_patch() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok"));

    let mut body = product_json(9, "Espresso");
    body["is_active"] = json!(false);
    backend.enqueue(MockResponse::json(body)).await;

    let product = api.products().set_active(9, false).await.expect("patch");
    assert!(!product.is_active);

    let request = backend.last_request().await;
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.path, "/products/9");
    // Partial body: only the flipped flag, and no idempotency key
    assert_eq!(request.json_body(), json!({ "is_active": false }));
    assert!(request.header("idempotency-key").is_none());
}

#[tokio::test]
async fn test_product_search_uses_oversized_page() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok"));

    backend
        .enqueue(MockResponse::json(page_body(
            json!([product_json(1, "Espresso Beans")]),
            1,
            1,
            50,
            1,
        )))
        .await;
    let results = api.products().search("espresso").await.expect("search");
    assert_eq!(results.len(), 1);

    let request = backend.last_request().await;
    assert!(request.query.contains("search=espresso"));
    assert!(request.query.contains("per_page=50"));
}

#[tokio::test]
async fn test_low_stock_filters_active_products_locally() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok"));

    let mut scarce = product_json(1, "Espresso");
    scarce["stock_quantity"] = json!(2);
    let mut plenty = product_json(2, "Latte");
    plenty["stock_quantity"] = json!(40);
    let untracked = product_json(3, "Mocha");
    backend
        .enqueue(MockResponse::json(page_body(
            json!([scarce, plenty, untracked]),
            1,
            1,
            1000,
            3,
        )))
        .await;

    let low = api.products().low_stock(5).await.expect("low stock");
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].id, 1);

    let request = backend.last_request().await;
    assert!(request.query.contains("is_active=true"));
}

#[tokio::test]
async fn test_menu_decodes_tenant_block_and_products() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::shared());

    backend
        .enqueue(MockResponse::json(json!({
            "tenant": { "name": "Vela Cafe", "logo": "https://cdn.example/logo.png" },
            "products": [product_json(1, "Espresso")],
        })))
        .await;

    let menu = api.customers().menu().await.expect("menu");
    assert_eq!(menu.tenant["name"], "Vela Cafe");
    assert_eq!(menu.products.len(), 1);

    let request = backend.last_request().await;
    assert_eq!(request.path, "/customers/menu");
}

#[tokio::test]
async fn test_time_periods_unwraps_envelope() {
    let backend = MockBackend::start().await;
    let api = api_for(&backend, MemorySession::with_token("tok"));

    backend
        .enqueue(MockResponse::json(json!({
            "time_periods": {
                "today": {
                    "label": "Today",
                    "time_range": "today",
                    "description": "Orders placed today",
                },
            },
        })))
        .await;

    let periods = api.orders().time_periods().await.expect("periods");
    assert_eq!(periods.len(), 1);
    assert_eq!(periods["today"].time_range, "today");

    let request = backend.last_request().await;
    assert_eq!(request.path, "/orders/time-periods");
}
