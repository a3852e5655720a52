//! Types for the in-memory bookshelf catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One publication (book or magazine issue) in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identifier. Empty until the store assigns one.
    #[serde(default)]
    pub id: String,
    /// Publication title.
    pub title: String,
    /// Short description / blurb.
    #[serde(default)]
    pub description: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover: String,
    /// Download URL. Empty while the publication is locked.
    #[serde(default)]
    pub link: String,
    /// Category label (e.g., "Book", "MagPI").
    pub category: String,
}

impl Entry {
    /// Create an entry without an id, as a feed would produce it.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        cover: impl Into<String>,
        link: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: description.into(),
            cover: cover.into(),
            link: link.into(),
            category: category.into(),
        }
    }

    /// Set a pre-assigned id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether the publication is not downloadable yet.
    pub fn is_locked(&self) -> bool {
        self.link.is_empty()
    }
}

/// Errors raised while building or publishing a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An entry could not be given a usable id. The replace was aborted.
    #[error("Failed to build snapshot: entry #{index} ({title:?}): {reason}")]
    BuildFailure {
        index: usize,
        title: String,
        reason: String,
    },
}
