//! Refresh loop types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::feed::FeedError;

/// Why a refresh cycle did not publish a new catalog.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Feed fetch failed: {0}")]
    Feed(#[from] FeedError),

    #[error("Catalog update failed: {0}")]
    Catalog(#[from] CatalogError),
}

impl RefreshError {
    /// Metric label for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            RefreshError::Feed(_) => "fetch_error",
            RefreshError::Catalog(_) => "build_error",
        }
    }
}

/// Current state of the refresh loop.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshStatus {
    /// Whether the background loop is running.
    pub running: bool,
    /// Pause between cycles, in seconds.
    pub interval_secs: u64,
    /// Cycles attempted (successful or not).
    pub cycles: u64,
    /// Cycles that did not publish a catalog.
    pub failures: u64,
    /// Entries published by the last successful cycle.
    pub last_entry_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_success_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_failure_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}
