//! Integration tests for Shopfront.
//!
//! Tests drive the full storefront router in-process with
//! `tower::ServiceExt::oneshot`, so no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_api` - HTTP API behavior
//! - `storefront_persistence` - State surviving a restart
//! - `storefront_orders` - Order placement and the last order
//! - `storefront_events` - Server-sent events

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use shopfront_storefront::config::StorefrontConfig;
use shopfront_storefront::state::AppState;

/// A storefront instance wired for in-process requests.
pub struct TestContext {
    pub state: AppState,
    router: Router,
}

impl TestContext {
    /// Storefront with in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_data_dir("")
    }

    /// Storefront persisting to `dir`. Contexts opened on the same directory
    /// share state the way two runs of the binary would.
    #[must_use]
    pub fn with_data_dir(dir: &Path) -> Self {
        Self::from_data_dir(&dir.to_string_lossy())
    }

    fn from_data_dir(dir: &str) -> Self {
        let config = StorefrontConfig::from_lookup(|key| {
            (key == "SHOPFRONT_DATA_DIR").then(|| dir.to_string())
        })
        .expect("Failed to build test configuration");

        let state = AppState::from_config(config);
        let router = shopfront_storefront::app(state.clone());
        Self { state, router }
    }

    /// Send a request and return the status and parsed JSON body.
    ///
    /// Non-JSON bodies (such as `/health`) come back as a JSON string.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Raw request against the router, for streaming responses.
    pub async fn raw(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible")
    }
}
