//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! with a mock feed injected, so the full HTTP stack can be exercised
//! without the network.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use bookshelf_core::{
    testing::MockFeedClient, CatalogStore, Config, FeedClient, Refresher, ServerConfig,
};

/// Re-export fixtures for test convenience
pub use bookshelf_core::testing::fixtures;

/// Test fixture for E2E testing with a mock feed.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_books() {
///     let fixture = TestFixture::new().await;
///     fixture.feed.set_entries(fixtures::sample_feed()).await;
///     fixture.refresh().await;
///
///     let response = fixture.get("/module/books?cat=MagPI").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock feed - configure entries and failures
    pub feed: Arc<MockFeedClient>,
    /// The catalog served by the router
    pub store: Arc<CatalogStore>,
    /// Refresher wired to the mock feed (not started)
    pub refresher: Arc<Refresher>,
    /// Temporary static directory
    pub static_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

impl TestFixture {
    /// Create a new test fixture with an empty catalog.
    pub async fn new() -> Self {
        let static_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(static_dir.path().join("style.css"), "body { margin: 0; }")
            .expect("Failed to write static file");

        let feed = Arc::new(MockFeedClient::new());
        let store = Arc::new(CatalogStore::new());
        let refresher = Arc::new(Refresher::new(
            Arc::clone(&feed) as Arc<dyn FeedClient>,
            Arc::clone(&store),
            Duration::from_secs(3600),
        ));

        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
                static_dir: static_dir.path().to_path_buf(),
            },
            ..Config::default()
        };

        let state = Arc::new(bookshelf_server::state::AppState::new(
            config,
            Arc::clone(&store),
            Arc::clone(&refresher),
        ));
        let router = bookshelf_server::api::create_router(state);

        Self {
            router,
            feed,
            store,
            refresher,
            static_dir,
        }
    }

    /// Create a fixture whose catalog holds the sample feed.
    pub async fn with_sample_feed() -> Self {
        let fixture = Self::new().await;
        fixture.feed.set_entries(fixtures::sample_feed()).await;
        fixture.refresh().await;
        fixture
    }

    /// Run one refresh cycle, panicking if it fails.
    pub async fn refresh(&self) {
        self.refresher
            .refresh_once()
            .await
            .expect("refresh should succeed");
    }

    /// Send a GET request to the test router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            body: String::from_utf8_lossy(&body_bytes).to_string(),
        }
    }
}
