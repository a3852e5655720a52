//! Immutable catalog snapshots.
//!
//! A snapshot holds the full entry list together with two derived indexes
//! (by id and by category). All three views are built from the same input
//! before the snapshot is handed out, and nothing mutates a snapshot after
//! that.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::identity::identify;
use super::types::{CatalogError, Entry};

/// One complete, internally consistent view of the catalog.
#[derive(Debug, Clone)]
pub struct Snapshot {
    entries: Vec<Arc<Entry>>,
    by_id: HashMap<String, Arc<Entry>>,
    by_category: BTreeMap<String, Vec<Arc<Entry>>>,
    built_at: DateTime<Utc>,
}

impl Snapshot {
    /// An empty snapshot, used before the first successful refresh.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            by_id: HashMap::new(),
            by_category: BTreeMap::new(),
            built_at: Utc::now(),
        }
    }

    /// Build a snapshot from raw entries.
    ///
    /// Entries without an id get one derived from `(cover, title)`; entries
    /// that already carry an id keep it unmodified. If two entries end up with
    /// the same id, the first one wins.
    pub fn build(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        Self::build_with(entries, |entry| Ok(identify(&entry.cover, &entry.title)))
    }

    /// Build a snapshot, deriving missing ids with `generate`.
    ///
    /// A generator error aborts the whole build.
    pub(crate) fn build_with<F>(entries: Vec<Entry>, generate: F) -> Result<Self, CatalogError>
    where
        F: Fn(&Entry) -> Result<String, String>,
    {
        let mut list = Vec::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_category: BTreeMap<String, Vec<Arc<Entry>>> = BTreeMap::new();

        for (index, mut entry) in entries.into_iter().enumerate() {
            assign_id(index, &mut entry, &generate)?;

            if by_id.contains_key(&entry.id) {
                warn!(
                    "Dropping duplicate entry {:?} (id {})",
                    entry.title, entry.id
                );
                continue;
            }

            let entry = Arc::new(entry);
            by_id.insert(entry.id.clone(), Arc::clone(&entry));
            by_category
                .entry(entry.category.clone())
                .or_default()
                .push(Arc::clone(&entry));
            list.push(entry);
        }

        Ok(Self {
            entries: list,
            by_id,
            by_category,
            built_at: Utc::now(),
        })
    }

    /// Look up an entry by id.
    pub fn get_by_id(&self, id: &str) -> Option<Arc<Entry>> {
        self.by_id.get(id).cloned()
    }

    /// All entries, or only those in `category` when one is given.
    pub fn get(&self, category: Option<&str>) -> Vec<Arc<Entry>> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => self
                .by_category
                .get(category)
                .cloned()
                .unwrap_or_default(),
            None => self.entries.clone(),
        }
    }

    /// Distinct category labels, sorted ascending.
    pub fn categories(&self) -> Vec<String> {
        self.by_category.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When this snapshot was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

fn assign_id<F>(index: usize, entry: &mut Entry, generate: &F) -> Result<(), CatalogError>
where
    F: Fn(&Entry) -> Result<String, String>,
{
    if !entry.id.is_empty() {
        debug!("Entry {:?} already has id {}", entry.title, entry.id);
        return Ok(());
    }

    entry.id = generate(entry).map_err(|reason| CatalogError::BuildFailure {
        index,
        title: entry.title.clone(),
        reason,
    })?;
    Ok(())
}
