//! Testing utilities and mock implementations.
//!
//! Provides a controllable [`FeedClient`](crate::feed::FeedClient) so the
//! refresh loop and the HTTP layer can be exercised without the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf_core::testing::{fixtures, MockFeedClient};
//!
//! let feed = MockFeedClient::new();
//! feed.set_entries(fixtures::sample_feed()).await;
//! feed.set_failing(true); // every fetch now fails
//! ```

mod mock_feed;

pub use mock_feed::MockFeedClient;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::Entry;
    use crate::feed::{BOOK_CATEGORY, MAGPI_CATEGORY};

    /// A magazine issue as the feed would produce it (no id).
    pub fn magazine(title: &str, link: &str) -> Entry {
        Entry::new(
            title,
            format!("Description for {}", title),
            format!("http://localhost/covers/{}", slug(title)),
            link,
            MAGPI_CATEGORY,
        )
    }

    /// A book as the feed would produce it (no id).
    pub fn book(title: &str, link: &str) -> Entry {
        Entry::new(
            title,
            format!("Description for {}", title),
            format!("http://localhost/covers/book-{}", slug(title)),
            link,
            BOOK_CATEGORY,
        )
    }

    /// Two magazines and two books, one locked and one available of each.
    pub fn sample_feed() -> Vec<Entry> {
        vec![
            magazine("MagPi Issue 1", ""),
            magazine("MagPi Issue 2", "http://localhost/magpi/2.pdf"),
            book("Locked Book", ""),
            book("Available Book", "http://localhost/book/available.pdf"),
        ]
    }

    fn slug(title: &str) -> String {
        title.to_lowercase().replace(' ', "-")
    }
}
