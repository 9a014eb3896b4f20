//! Handler tests for Products domain
//!
//! These drive the products router through `oneshot` against the in-memory
//! repository and check status codes and JSON bodies:
//! - request validation (body shape, field ranges, path ids)
//! - business-rule rejections
//! - the `{data}` / `{id}` / `{success}` envelopes

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    Router::new().nest("/products", handlers::router(service))
}

// Repository whose store is unreachable
struct UnavailableRepository;

const STORE_FAILURE: &str = "connection refused by 10.0.0.5:5432";

#[async_trait]
impl ProductRepository for UnavailableRepository {
    async fn create(&self, _input: ProductInput) -> ProductResult<i32> {
        Err(ProductError::Database(STORE_FAILURE.to_string()))
    }

    async fn get_by_id(&self, _id: i32) -> ProductResult<Option<Product>> {
        Err(ProductError::Database(STORE_FAILURE.to_string()))
    }

    async fn update(&self, _id: i32, _input: ProductInput) -> ProductResult<bool> {
        Err(ProductError::Database(STORE_FAILURE.to_string()))
    }

    async fn delete(&self, _id: i32) -> ProductResult<bool> {
        Err(ProductError::Database(STORE_FAILURE.to_string()))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Err(ProductError::Database(STORE_FAILURE.to_string()))
    }
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to send a request and parse the JSON response body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn product_body(name: &str, price: i32, quantity: i32) -> Value {
    json!({
        "name": name,
        "description": "Test Description",
        "price": price,
        "quantity": quantity
    })
}

async fn create(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        json_request("POST", "/products", product_body(name, 5000, 10)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_then_get_product() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/products", product_body("Test Product", 5000, 10)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, body) = send(&app, empty_request("GET", &format!("/products/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {
                "id": id,
                "name": "Test Product",
                "description": "Test Description",
                "price": 5000,
                "quantity": 10
            }
        })
    );
}

#[tokio::test]
async fn test_create_with_reserved_name_returns_400() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/products", product_body("Sarkor", 5000, 10)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errorCode"], 400);
    assert!(body["error"].as_str().unwrap().contains("reserved"));
}

#[tokio::test]
async fn test_create_with_excessive_price_returns_400() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/products", product_body("Test Product", 20000, 10)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("exceeds"));

    let (_, body) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_create_with_excessive_quantity_returns_400() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request("POST", "/products", product_body("Test Product", 10, 1001)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "quantity exceeds maximum allowed value of 1000 units"
    );
}

#[tokio::test]
async fn test_create_validates_input_shape() {
    let app = app();

    let cases = [
        product_body("x", 10, 1),
        product_body("Widget", 0, 1),
        product_body("Widget", 10, -1),
        json!({"name": "Widget", "description": "", "price": 10, "quantity": 1}),
        json!({"name": "Widget", "price": 10, "quantity": 1}),
        json!({"name": "Widget", "description": "d", "price": "ten", "quantity": 1}),
    ];

    for body in cases {
        let (status, response) = send(&app, json_request("POST", "/products", body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {body}");
        assert_eq!(response["errorCode"], 400);
    }
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_get_with_non_numeric_id_returns_400() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/products/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID");
}

#[tokio::test]
async fn test_get_unknown_product_returns_404() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/products/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": "Product not found", "errorCode": 404})
    );
}

#[tokio::test]
async fn test_update_then_get_reflects_changes() {
    let app = app();
    let id = create(&app, "Original").await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/products/{id}"),
            json!({"name": "Renamed", "description": "New", "price": 42, "quantity": 7}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, body) = send(&app, empty_request("GET", &format!("/products/{id}"))).await;
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Renamed");
    assert_eq!(body["data"]["price"], 42);
    assert_eq!(body["data"]["quantity"], 7);
}

#[tokio::test]
async fn test_update_enforces_business_rules() {
    let app = app();
    let id = create(&app, "Original").await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/products/{id}"),
            product_body("SOCHNAYA DOLINA", 10, 1),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product name is reserved");

    let (_, body) = send(&app, empty_request("GET", &format!("/products/{id}"))).await;
    assert_eq!(body["data"]["name"], "Original");
}

#[tokio::test]
async fn test_update_unknown_product_returns_404() {
    let app = app();

    let (status, _) = send(
        &app,
        json_request("PUT", "/products/77", product_body("Widget", 10, 1)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_bad_id_returns_400() {
    let app = app();

    let (status, _) = send(
        &app,
        json_request("PUT", "/products/seven", product_body("Widget", 10, 1)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let app = app();
    let id = create(&app, "Doomed").await;

    let (status, body) = send(&app, empty_request("DELETE", &format!("/products/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = send(&app, empty_request("GET", &format!("/products/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request("DELETE", &format!("/products/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_with_bad_id_returns_400() {
    let app = app();

    let (status, body) = send(&app, empty_request("DELETE", "/products/1.5")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID");
}

#[tokio::test]
async fn test_list_reflects_non_deleted_products() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));

    let first = create(&app, "First").await;
    let second = create(&app, "Second").await;
    let third = create(&app, "Third").await;
    send(&app, empty_request("DELETE", &format!("/products/{second}"))).await;

    let (status, body) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, third]);
}

#[tokio::test]
async fn test_store_failure_returns_generic_500_on_every_route() {
    let service = ProductService::new(UnavailableRepository);
    let app = Router::new().nest("/products", handlers::router(service));

    let requests = [
        json_request("POST", "/products", product_body("Widget", 10, 1)),
        empty_request("GET", "/products"),
        empty_request("GET", "/products/1"),
        json_request("PUT", "/products/1", product_body("Widget", 10, 1)),
        empty_request("DELETE", "/products/1"),
    ];

    for request in requests {
        let route = format!("{} {}", request.method(), request.uri());
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{route}");
        assert_eq!(
            body,
            json!({"success": false, "error": "Internal server error", "errorCode": 500}),
            "{route}"
        );
        assert!(!body.to_string().contains("10.0.0.5"), "{route}");
    }
}
