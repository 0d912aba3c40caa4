// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end router testing.
//!
//! `TestHarness` assembles the full gateway (built-in patterns, in-memory image
//! store on a manual clock, mock generator) and drives requests through the
//! router with `tower::ServiceExt::oneshot`, without binding a socket.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use genui_core::{Clock, ImageGenerator, ImageStore};
use genui_gateway::{build_router, GatewayState};
use genui_imaging::memory::{MemoryImageStore, DEFAULT_RETENTION};
use genui_patterns::PatternRegistry;
use tower::ServiceExt;

use crate::clock::ManualClock;
use crate::mock_generator::{MockImageGenerator, MockResult};

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    results: Vec<MockResult>,
    with_generator: bool,
    retention: Duration,
    cache_max_age_secs: u64,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            results: Vec::new(),
            with_generator: true,
            retention: DEFAULT_RETENTION,
            cache_max_age_secs: 600,
        }
    }

    /// Queue generator results.
    pub fn with_mock_results(mut self, results: Vec<MockResult>) -> Self {
        self.results = results;
        self
    }

    /// Build without an image generator, as when no API key is configured.
    pub fn without_generator(mut self) -> Self {
        self.with_generator = false;
        self
    }

    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_cache_max_age(mut self, secs: u64) -> Self {
        self.cache_max_age_secs = secs;
        self
    }

    pub fn build(self) -> TestHarness {
        let clock = Arc::new(ManualClock::epoch());
        let store = Arc::new(MemoryImageStore::new(
            Arc::clone(&clock) as Arc<dyn Clock>,
            self.retention,
        ));
        let generator = Arc::new(MockImageGenerator::with_results(self.results));
        let registry = Arc::new(PatternRegistry::with_builtin_patterns());

        let state = GatewayState::new(
            Arc::clone(&registry),
            Arc::clone(&store) as Arc<dyn ImageStore>,
            self.with_generator
                .then(|| Arc::clone(&generator) as Arc<dyn ImageGenerator>),
            self.cache_max_age_secs,
        );

        TestHarness {
            router: build_router(state.clone()),
            state,
            clock,
            store,
            generator,
            registry,
        }
    }
}

/// Response captured from the router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Body parsed as JSON; panics if it is not.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response body is not JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A complete gateway with mock backends.
pub struct TestHarness {
    pub router: Router,
    pub state: GatewayState,
    /// Clock behind the image store.
    pub clock: Arc<ManualClock>,
    pub store: Arc<MemoryImageStore>,
    pub generator: Arc<MockImageGenerator>,
    pub registry: Arc<PatternRegistry>,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Sends a request through a clone of the router.
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.request(request).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        self.request(request).await
    }
}
