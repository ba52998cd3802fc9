//! Common test utilities and fixtures for integration tests
//!
//! - `TestApp` wrapping the composed router over an in-memory store
//! - Session cookie helpers
//! - Request builders and body parsing

use anyhow::Result;
use axum::{
    body::Body,
    http::{header::COOKIE, Method, Request, Response},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use solosphere_auth::{AuthBackend, AuthConfig};
use solosphere_common::config::Config;
use solosphere_store::mock::MockDocumentStore;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only"; // pragma: allowlist secret

/// Test application backed by a `MockDocumentStore`
pub struct TestApp {
    pub store: MockDocumentStore,
    pub auth: AuthBackend,
    pub config: Config,
}

impl TestApp {
    pub fn new() -> Result<Self> {
        Self::with_production(false)
    }

    /// Test application with production cookie attributes
    pub fn with_production(production: bool) -> Result<Self> {
        let config = Config::from_lookup(|key| match key {
            "STORE_PROVIDER" => Some("mock".to_string()),
            "ACCESS_TOKEN_SECRET" => Some(TEST_SECRET.to_string()),
            "NODE_ENV" if production => Some("production".to_string()),
            _ => None,
        })?;

        let auth = AuthBackend::new(AuthConfig::from(&config));

        Ok(Self {
            store: MockDocumentStore::new(),
            auth,
            config,
        })
    }

    /// Build a router sharing this app's store
    pub fn test_router(&self) -> Router {
        solosphere_app::create_app(&self.config, Arc::new(self.store.clone()))
    }

    /// `Cookie` header value carrying a fresh token for `email`
    pub fn session_cookie(&self, email: &str) -> String {
        let token = self.auth.issue(json!({ "email": email })).unwrap();
        format!("token={}", token)
    }

    /// `Cookie` header value carrying a token issued at `issued_at`
    pub fn session_cookie_at(&self, email: &str, issued_at: DateTime<Utc>) -> String {
        let token = self
            .auth
            .issue_at(json!({ "email": email }), issued_at)
            .unwrap();
        format!("token={}", token)
    }

    /// Send one request through a fresh router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        use tower::ServiceExt;
        self.test_router().oneshot(request).await.unwrap()
    }
}

/// Helper: build a request with an optional session cookie and JSON body
pub fn request(method: Method, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    if let Some(b) = body {
        builder = builder.header("content-type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper: POST /job and return the new job's identifier
pub async fn post_job(app: &TestApp, body: Value) -> String {
    let response = app.send(request(Method::POST, "/job", None, Some(body))).await;
    parse_body(response).await["insertedId"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Helper: POST /bid and return the new bid's identifier
pub async fn post_bid(app: &TestApp, body: Value) -> String {
    let response = app.send(request(Method::POST, "/bid", None, Some(body))).await;
    parse_body(response).await["insertedId"]
        .as_str()
        .unwrap()
        .to_string()
}
