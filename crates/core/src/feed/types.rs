//! Wire types for the MagPi bookshelf XML document.

use serde::Deserialize;

use crate::catalog::Entry;

/// Category given to items from the `MAGPI` section.
pub const MAGPI_CATEGORY: &str = "MagPI";

/// Category given to items from the `BOOKS` section.
pub const BOOK_CATEGORY: &str = "Book";

/// Root of the bookshelf document.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BookshelfXml {
    #[serde(rename = "MAGPI", default)]
    pub magpi: BookshelfSection,
    #[serde(rename = "BOOKS", default)]
    pub books: BookshelfSection,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BookshelfSection {
    #[serde(rename = "ITEM", default)]
    pub items: Vec<BookshelfItem>,
}

/// A single item (book or magazine issue).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BookshelfItem {
    #[serde(rename = "TITLE", default)]
    pub title: String,
    #[serde(rename = "DESC", default)]
    pub description: String,
    #[serde(rename = "COVER", default)]
    pub cover: String,
    /// Download URL, empty while locked.
    #[serde(rename = "PDF", default)]
    pub pdf: String,
}

impl BookshelfItem {
    /// Convert to a catalog entry. Surrounding whitespace is trimmed from
    /// every field, so padded and unpadded feed values get the same id.
    pub fn into_entry(self, category: &str) -> Entry {
        Entry::new(
            self.title.trim(),
            self.description.trim(),
            self.cover.trim(),
            self.pdf.trim(),
            category,
        )
    }
}
