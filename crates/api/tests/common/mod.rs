#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use robot_store_api::config::{ServerConfig, StoreBackend};
use robot_store_api::router::build_app_router;
use robot_store_api::state::AppState;
use robot_store_core::types::{parse_doc_id, DocId};
use robot_store_db::store::MemoryStore;
use robot_store_db::ConnectOptions;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: String::new(),
        db: ConnectOptions::default(),
    }
}

/// Build the full application router over the given in-memory store.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack. Keep a clone of `store` to inspect it.
pub fn build_test_app(store: MemoryStore) -> Router {
    let state = AppState {
        store: Arc::new(store),
    };
    build_app_router(state, &test_config())
}

/// A seeded store and the router serving it.
pub fn seeded_app() -> (Router, MemoryStore) {
    let store = MemoryStore::seeded();
    (build_test_app(store.clone()), store)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header("content-type", "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

/// Send a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A product body that passes validation.
pub fn laser_mug() -> Value {
    json!({
        "title": "Laser Mug",
        "price": 12.5,
        "category": "Mugs",
        "category_id": 3,
        "character": "Rex",
        "character_id": 4,
        "image": "a.png",
    })
}

/// `laser_mug()` with the given fields overridden.
pub fn product_with(overrides: Value) -> Value {
    let mut body = laser_mug();
    let (Value::Object(base), Value::Object(extra)) = (&mut body, overrides) else {
        panic!("expected objects");
    };
    base.extend(extra);
    body
}

/// POST a product and return the identifier from `"id: <id>"`.
pub async fn create_product(app: &Router, body: &Value) -> DocId {
    let response = post_json(app.clone(), "/api/products", body).await;
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    let data = json["data"].as_str().unwrap();
    parse_doc_id(data.strip_prefix("id: ").unwrap()).unwrap()
}
