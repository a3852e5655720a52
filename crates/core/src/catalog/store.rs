//! The shared catalog store.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::snapshot::Snapshot;
use super::types::{CatalogError, Entry};
use crate::metrics::CATALOG_ENTRIES;

/// In-memory catalog with atomic snapshot replacement.
///
/// Readers load the current snapshot without locking. `replace_all` builds a
/// complete new snapshot off to the side and publishes it with a single
/// pointer swap, so a reader sees either the old catalog or the new one.
#[derive(Debug)]
pub struct CatalogStore {
    current: ArcSwap<Snapshot>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot::empty()),
        }
    }

    /// Pin the current snapshot for several reads against one view.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Look up an entry by id. `None` if absent.
    pub fn get_by_id(&self, id: &str) -> Option<Arc<Entry>> {
        self.current.load().get_by_id(id)
    }

    /// All entries, optionally filtered by exact category match.
    pub fn get(&self, category: Option<&str>) -> Vec<Arc<Entry>> {
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            debug!("Getting entries in category {:?}", category);
        }
        self.current.load().get(category)
    }

    /// Distinct category labels, sorted ascending.
    pub fn get_categories(&self) -> Vec<String> {
        self.current.load().categories()
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.load().is_empty()
    }

    /// Build time of the current snapshot.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.current.load().built_at()
    }

    /// Replace the whole catalog.
    ///
    /// On error nothing is published and the previous snapshot stays current.
    pub fn replace_all(&self, entries: Vec<Entry>) -> Result<(), CatalogError> {
        debug!("Replacing catalog with {} entries", entries.len());
        self.publish(Snapshot::build(entries)?);
        Ok(())
    }

    fn publish(&self, snapshot: Snapshot) {
        let len = snapshot.len();
        let categories = snapshot.categories().len();

        self.current.store(Arc::new(snapshot));
        CATALOG_ENTRIES.set(len as i64);

        info!(
            "Catalog replaced: {} entries in {} categories",
            len, categories
        );
    }
}
