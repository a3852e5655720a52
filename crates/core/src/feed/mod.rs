//! Upstream feed integration.
//!
//! A feed produces the full list of catalog entries on demand. Entries come
//! back without ids; the catalog assigns them when it builds a snapshot.

mod magpi;
mod types;

pub use magpi::{parse_bookshelf, MagPiClient};
pub use types::{BOOK_CATEGORY, MAGPI_CATEGORY};

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::Entry;

/// Errors that can occur while fetching the upstream feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Feed returned HTTP {status}")]
    Status { status: u16 },

    /// The document could not be parsed.
    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

/// Trait for catalog feeds.
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetch and parse the current catalog.
    async fn get_books(&self) -> Result<Vec<Entry>, FeedError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}
