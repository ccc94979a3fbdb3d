// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;

use quill::application::services::{ApplicationServices, Repositories, SlugSettings};
use quill::domain::dashboard::DashboardStats;
use quill::infrastructure::util::DefaultSlugGenerator;
use quill::presentation::http::state::HttpState;

use super::mocks::{
    DummyClock, InMemoryCategories, InMemoryComments, InMemoryPosts, InMemorySubscribers,
    InMemoryTags, SequentialTokens, StaticDashboard,
};

/// Handles to every in-memory store behind a set of services, so tests can
/// seed data and inspect what the services wrote.
#[derive(Clone)]
pub struct TestBackend {
    pub posts: Arc<InMemoryPosts>,
    pub categories: Arc<InMemoryCategories>,
    pub tags: Arc<InMemoryTags>,
    pub comments: Arc<InMemoryComments>,
    pub subscribers: Arc<InMemorySubscribers>,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(InMemoryPosts::new()),
            categories: Arc::new(InMemoryCategories::new()),
            tags: Arc::new(InMemoryTags::new()),
            comments: Arc::new(InMemoryComments::new()),
            subscribers: Arc::new(InMemorySubscribers::new()),
        }
    }

    pub fn repositories(&self) -> Repositories {
        let stats = DashboardStats {
            posts_total: 3,
            posts_published: 2,
            posts_draft: 1,
            ..DashboardStats::default()
        };
        Repositories {
            post_write: self.posts.clone(),
            post_read: self.posts.clone(),
            post_slugs: self.posts.clone(),
            categories: self.categories.clone(),
            category_slugs: self.categories.clone(),
            tags: self.tags.clone(),
            tag_slugs: self.tags.clone(),
            comments: self.comments.clone(),
            subscribers: self.subscribers.clone(),
            dashboard: Arc::new(StaticDashboard(stats)),
        }
    }

    pub fn services(&self) -> Arc<ApplicationServices> {
        self.services_with(SlugSettings::default())
    }

    pub fn services_with(&self, slug_settings: SlugSettings) -> Arc<ApplicationServices> {
        Arc::new(ApplicationServices::new(
            self.repositories(),
            Arc::new(DummyClock),
            Arc::new(DefaultSlugGenerator),
            Arc::new(SequentialTokens::default()),
            slug_settings,
        ))
    }
}

pub fn build_test_state(backend: &TestBackend) -> HttpState {
    HttpState {
        services: backend.services(),
        allowed_origins: Vec::new(),
    }
}

pub fn make_test_router(backend: &TestBackend) -> axum::Router {
    quill::presentation::http::routes::build_router(build_test_state(backend))
}

pub fn json_request(method: Method, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Assert the status and return the JSON body.
pub async fn read_json(resp: axum::response::Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    assert_eq!(
        status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&body_bytes)
    );
    serde_json::from_slice(&body_bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
