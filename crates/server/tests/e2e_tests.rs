//! End-to-end tests with a mocked feed.
//!
//! These tests run the full router in-process against a catalog filled by
//! the refresher from a mock feed.

mod common;

use axum::http::StatusCode;
use bookshelf_core::identify;

use common::{fixtures, TestFixture};

// =============================================================================
// Index page
// =============================================================================

#[tokio::test]
async fn test_index_empty_catalog() {
    let fixture = TestFixture::new().await;
    let response = fixture.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<title>Bookshelf</title>"));
    assert!(response.body.contains("No publications available yet."));
}

#[tokio::test]
async fn test_index_lists_categories() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    let book_pos = response.body.find("data-category=\"Book\"").unwrap();
    let magpi_pos = response.body.find("data-category=\"MagPI\"").unwrap();
    assert!(book_pos < magpi_pos, "categories should be sorted");
    assert!(response.body.contains("MagPi Issue 1"));
    assert!(response.body.contains("Available Book"));
}

#[tokio::test]
async fn test_index_with_category_preloads_list() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/?cat=MagPI").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("class=\"active\" href=\"/?cat=MagPI\""));
    assert!(response.body.contains("MagPi Issue 2"));
    assert!(!response.body.contains("Available Book"));
}

// =============================================================================
// Books module
// =============================================================================

#[tokio::test]
async fn test_books_all() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/module/books").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches("<li class=\"book").count(), 4);
}

#[tokio::test]
async fn test_books_empty_category_means_all() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/module/books?cat=").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches("<li class=\"book").count(), 4);
}

#[tokio::test]
async fn test_books_filtered_by_category() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/module/books?cat=MagPI").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches("<li class=\"book").count(), 2);
    assert!(response.body.contains("MagPi Issue 1"));
    assert!(response.body.contains("MagPi Issue 2"));
    assert_eq!(response.body.matches("class=\"book locked\"").count(), 1);
}

#[tokio::test]
async fn test_books_unknown_category() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/module/books?cat=Comics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No publications available yet."));
}

// =============================================================================
// Book module
// =============================================================================

#[tokio::test]
async fn test_book_by_id() {
    let fixture = TestFixture::with_sample_feed().await;
    let book = fixtures::book("Available Book", "http://localhost/book/available.pdf");
    let id = identify(&book.cover, &book.title);

    let response = fixture.get(&format!("/module/book/{}", id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h2>Available Book</h2>"));
    assert!(response.body.contains("http://localhost/book/available.pdf"));
}

#[tokio::test]
async fn test_locked_book_has_no_download() {
    let fixture = TestFixture::with_sample_feed().await;
    let book = fixtures::book("Locked Book", "");
    let id = identify(&book.cover, &book.title);

    let response = fixture.get(&format!("/module/book/{}", id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Locked"));
    assert!(!response.body.contains("Download PDF"));
}

#[tokio::test]
async fn test_book_not_found() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/module/book/does-not-exist").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Book not found"));
}

// =============================================================================
// Refresh behaviour seen through HTTP
// =============================================================================

#[tokio::test]
async fn test_feed_failure_keeps_serving_previous_catalog() {
    let fixture = TestFixture::with_sample_feed().await;

    fixture.feed.set_failing(true);
    assert!(fixture.refresher.refresh_once().await.is_err());

    let response = fixture.get("/module/books").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.matches("<li class=\"book").count(), 4);

    let health = fixture.get("/health").await.json();
    assert_eq!(health["entries"], 4);
    assert_eq!(health["refresh"]["failures"], 1);
}

#[tokio::test]
async fn test_new_feed_replaces_catalog() {
    let fixture = TestFixture::with_sample_feed().await;

    fixture
        .feed
        .set_entries(vec![fixtures::book("Only Book", "")])
        .await;
    fixture.refresh().await;

    let response = fixture.get("/module/books").await;
    assert_eq!(response.body.matches("<li class=\"book").count(), 1);
    assert!(response.body.contains("Only Book"));
    assert_eq!(fixture.store.get_categories(), vec!["Book"]);
}

// =============================================================================
// Operations
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::with_sample_feed().await;
    let response = fixture.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let json = response.json();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["entries"], 4);
    assert_eq!(json["categories"], 2);
    assert_eq!(json["refresh"]["cycles"], 1);
    assert_eq!(json["refresh"]["running"], false);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::with_sample_feed().await;
    fixture.get("/module/books").await;

    let response = fixture.get("/metrics").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("bookshelf_http_requests_total"));
    assert!(response.body.contains("bookshelf_refresh_cycles_total"));
}

#[tokio::test]
async fn test_static_files() {
    let fixture = TestFixture::new().await;

    let response = fixture.get("/static/style.css").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("margin"));

    let missing = fixture.get("/static/missing.js").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
