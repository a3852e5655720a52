use std::sync::Arc;
use bookshelf_core::{CatalogStore, Config, Refresher};

/// Shared application state
pub struct AppState {
    config: Config,
    store: Arc<CatalogStore>,
    refresher: Arc<Refresher>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<CatalogStore>, refresher: Arc<Refresher>) -> Self {
        Self {
            config,
            store,
            refresher,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &CatalogStore {
        self.store.as_ref()
    }

    pub fn refresher(&self) -> &Refresher {
        self.refresher.as_ref()
    }
}
