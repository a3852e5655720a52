//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog size
//! - Refresh cycles (results, durations)
//! - Upstream feed requests

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Entries in the currently published catalog.
pub static CATALOG_ENTRIES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "bookshelf_catalog_entries",
        "Number of entries in the published catalog",
    )
    .unwrap()
});

// =============================================================================
// Refresh Metrics
// =============================================================================

/// Refresh cycles by result.
pub static REFRESH_CYCLES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("bookshelf_refresh_cycles_total", "Total refresh cycles"),
        &["result"], // "success", "fetch_error", "build_error"
    )
    .unwrap()
});

/// Duration of a refresh cycle (fetch + replace) in seconds.
pub static REFRESH_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "bookshelf_refresh_duration_seconds",
            "Duration of a refresh cycle",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["result"],
    )
    .unwrap()
});

// =============================================================================
// Feed Metrics
// =============================================================================

/// Upstream feed request duration in seconds.
pub static FEED_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "bookshelf_feed_request_duration_seconds",
            "Duration of upstream feed requests",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["result"], // "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_ENTRIES.clone()),
        Box::new(REFRESH_CYCLES.clone()),
        Box::new(REFRESH_DURATION.clone()),
        Box::new(FEED_REQUEST_DURATION.clone()),
    ]
}
