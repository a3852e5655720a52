//! MagPi bookshelf client.
//!
//! The bookshelf is a single XML document with two sections: `MAGPI`
//! (magazine issues) and `BOOKS`. Both are flattened into one entry list,
//! magazines first.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::types::{BookshelfXml, BOOK_CATEGORY, MAGPI_CATEGORY};
use super::{FeedClient, FeedError};
use crate::catalog::Entry;
use crate::config::FeedConfig;
use crate::metrics::FEED_REQUEST_DURATION;

/// HTTP client for the MagPi bookshelf feed.
pub struct MagPiClient {
    client: Client,
    url: String,
}

impl MagPiClient {
    /// Create a new client from feed configuration.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FeedError> {
        debug!("Fetching bookshelf from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl FeedClient for MagPiClient {
    async fn get_books(&self) -> Result<Vec<Entry>, FeedError> {
        let start = Instant::now();
        let result = self.fetch().await;
        let outcome = if result.is_ok() { "success" } else { "error" };
        FEED_REQUEST_DURATION
            .with_label_values(&[outcome])
            .observe(start.elapsed().as_secs_f64());

        let entries = parse_bookshelf(&result?)?;
        debug!("Parsed {} bookshelf entries", entries.len());
        Ok(entries)
    }

    fn name(&self) -> &str {
        "magpi"
    }
}

/// Parse a bookshelf XML document into catalog entries.
///
/// Magazine issues are tagged [`MAGPI_CATEGORY`] and come first, followed by
/// books tagged [`BOOK_CATEGORY`], each in document order.
pub fn parse_bookshelf(xml: &str) -> Result<Vec<Entry>, FeedError> {
    let doc: BookshelfXml =
        quick_xml::de::from_str(xml).map_err(|e| FeedError::Parse(e.to_string()))?;

    let mut entries = Vec::with_capacity(doc.magpi.items.len() + doc.books.items.len());
    entries.extend(
        doc.magpi
            .items
            .into_iter()
            .map(|item| item.into_entry(MAGPI_CATEGORY)),
    );
    entries.extend(
        doc.books
            .items
            .into_iter()
            .map(|item| item.into_entry(BOOK_CATEGORY)),
    );
    Ok(entries)
}
