//! Content-based identifiers for catalog entries.

use sha2::{Digest, Sha256};

/// Derive the stable id for an entry from its cover URL and title.
///
/// The id is the lowercase hex SHA-256 of `"{cover}:{title}"`.
pub fn identify(cover: &str, title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(cover.as_bytes());
    hasher.update(b":");
    hasher.update(title.as_bytes());
    format!("{:x}", hasher.finalize())
}
