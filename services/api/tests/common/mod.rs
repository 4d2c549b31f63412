// tests/common/mod.rs (test-only helpers shared by the route tests)
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mockall::mock;
use portfolio_api::adapters::{CachedPortfolioStore, MemoryStore};
use portfolio_api::web::{build_router, state::AppState};
use portfolio_core::domain::ContactSubmission;
use portfolio_core::ports::{
    CompletionService, ContactNotifier, PortResult, PortfolioStore,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub Completion {}
    #[async_trait]
    impl CompletionService for Completion {
        async fn complete(&self, instructions: &str, message: &str) -> PortResult<String>;
    }
}

mock! {
    pub Notifier {}
    #[async_trait]
    impl ContactNotifier for Notifier {
        async fn notify(&self, submission: &ContactSubmission) -> PortResult<()>;
    }
}

pub struct TestApp {
    pub router: Router,
    /// Backing store; writes here are visible to the routes.
    pub store: Arc<MemoryStore>,
    /// The store the routes read through (cached or not).
    pub portfolio: Arc<dyn PortfolioStore>,
}

pub fn test_app(completion: MockCompletion, notifier: MockNotifier) -> TestApp {
    build(completion, notifier, false)
}

pub fn cached_test_app(completion: MockCompletion, notifier: MockNotifier) -> TestApp {
    build(completion, notifier, true)
}

fn build(completion: MockCompletion, notifier: MockNotifier, cached: bool) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let portfolio: Arc<dyn PortfolioStore> = if cached {
        Arc::new(CachedPortfolioStore::new(store.clone()))
    } else {
        store.clone()
    };

    let app_state = Arc::new(AppState {
        portfolio: portfolio.clone(),
        chat_log: store.clone(),
        completion: Arc::new(completion),
        contact: Arc::new(notifier),
    });

    TestApp {
        router: build_router(app_state),
        store,
        portfolio,
    }
}

/// A completion mock that must never be called.
pub fn idle_completion() -> MockCompletion {
    let mut completion = MockCompletion::new();
    completion.expect_complete().never();
    completion
}

/// A notifier mock that must never be called.
pub fn idle_notifier() -> MockNotifier {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().never();
    notifier
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

pub async fn post_raw(router: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}
