//! Mock feed client for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::Entry;
use crate::feed::{FeedClient, FeedError};

/// Mock implementation of the FeedClient trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable entries
/// - Count fetches for assertions
/// - Simulate failures and slow responses
pub struct MockFeedClient {
    /// Entries returned by successful fetches.
    entries: Arc<RwLock<Vec<Entry>>>,
    /// If set, the next fetch fails with this error.
    next_error: Arc<RwLock<Option<FeedError>>>,
    /// When true, every fetch fails.
    failing: AtomicBool,
    /// Simulated fetch latency.
    delay: Arc<RwLock<Option<Duration>>>,
    calls: AtomicUsize,
}

impl std::fmt::Debug for MockFeedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFeedClient")
            .field("failing", &self.failing.load(Ordering::Relaxed))
            .field("calls", &self.calls.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for MockFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeedClient {
    /// Create a new mock feed with no entries.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            failing: AtomicBool::new(false),
            delay: Arc::new(RwLock::new(None)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Set the entries returned by subsequent fetches.
    pub async fn set_entries(&self, entries: Vec<Entry>) {
        *self.entries.write().await = entries;
    }

    /// Make the next fetch fail with `error`.
    pub async fn set_next_error(&self, error: FeedError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every fetch fail (503) until cleared.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Delay each fetch by `delay`.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write().await = delay;
    }

    /// Number of fetches started so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedClient for MockFeedClient {
    async fn get_books(&self) -> Result<Vec<Entry>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(FeedError::Status { status: 503 });
        }
        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.entries.read().await.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_returns_configured_entries() {
        let feed = MockFeedClient::new();
        feed.set_entries(fixtures::sample_feed()).await;

        let entries = feed.get_books().await.unwrap();
        assert_eq!(entries, fixtures::sample_feed());
        assert_eq!(feed.call_count(), 1);
    }

    #[tokio::test]
    async fn test_next_error_fails_once() {
        let feed = MockFeedClient::new();
        feed.set_next_error(FeedError::Parse("bad xml".to_string()))
            .await;

        assert!(matches!(feed.get_books().await, Err(FeedError::Parse(_))));
        assert!(feed.get_books().await.is_ok());
        assert_eq!(feed.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_until_cleared() {
        let feed = MockFeedClient::new();
        feed.set_failing(true);
        assert!(feed.get_books().await.is_err());
        assert!(feed.get_books().await.is_err());

        feed.set_failing(false);
        assert!(feed.get_books().await.is_ok());
    }
}
