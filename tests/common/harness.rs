//! In-memory application harness
//!
//! Builds the full router over memory stores with a low bcrypt cost and a
//! fixed signing secret, and sends requests to it without a socket.

use std::sync::Arc;

use auctionhouse::backend::auth::{CredentialService, UserStore};
use auctionhouse::backend::server::{build_app, AppConfig};
use auctionhouse::backend::store::{MemoryProductStore, MemoryUserStore};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "auctionhouse";

/// Lowest cost bcrypt accepts
pub const TEST_HASH_COST: u32 = 4;

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .jwt_issuer(TEST_ISSUER)
        .build()
        .expect("test config is valid")
}

/// Response status plus the decoded JSON body (`Value::Null` when empty)
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub struct TestApp {
    router: Router,
    pub users: MemoryUserStore,
    pub products: MemoryProductStore,
}

impl TestApp {
    pub fn new() -> Self {
        let users = MemoryUserStore::new();
        let products = MemoryProductStore::new();
        let router = build_app(
            &test_config(),
            Arc::new(users.clone()),
            Arc::new(products.clone()),
            CredentialService::with_cost(TEST_HASH_COST),
        );

        Self {
            router,
            users,
            products,
        }
    }

    /// Stored password hash of an identity
    pub async fn password_hash_of(&self, id: Uuid) -> String {
        self.users
            .find_by_id(id)
            .await
            .expect("identity exists")
            .password_hash
    }

    /// Send a request with an optional JSON body and bearer token
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send_request(builder.body(body).expect("valid request"))
            .await
    }

    /// Send a raw body, e.g. malformed JSON
    pub async fn send_raw(&self, method: Method, uri: &str, raw: &'static str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw))
            .expect("valid request");
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON response body")
        };

        TestResponse { status, body }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
