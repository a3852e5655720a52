//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the bookshelf server:
//! - HTTP request metrics (latency, counts)
//! - Refresher status (collected dynamically)
//! - Core catalog and refresh metrics (registered from `bookshelf_core`)

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "bookshelf_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("bookshelf_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

// =============================================================================
// Refresher Metrics (collected dynamically)
// =============================================================================

/// Refresher running state (1 = running, 0 = stopped).
pub static REFRESHER_RUNNING: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "bookshelf_refresher_running",
        "Whether the catalog refresher is running (1) or stopped (0)",
    )
    .unwrap()
});

/// Unix timestamp of the last successful refresh (0 if none yet).
pub static LAST_SUCCESSFUL_REFRESH: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "bookshelf_last_successful_refresh_timestamp_seconds",
        "Unix time of the last successful catalog refresh",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();

    // Refresher
    registry
        .register(Box::new(REFRESHER_RUNNING.clone()))
        .unwrap();
    registry
        .register(Box::new(LAST_SUCCESSFUL_REFRESH.clone()))
        .unwrap();

    // Core metrics (catalog, refresh cycles, feed)
    for metric in bookshelf_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Collect dynamic metrics from current application state.
pub async fn collect_dynamic_metrics(state: &crate::state::AppState) {
    let status = state.refresher().status().await;
    REFRESHER_RUNNING.set(if status.running { 1 } else { 0 });
    if let Some(at) = status.last_success_at {
        LAST_SUCCESSFUL_REFRESH.set(at.timestamp());
    }
}

static HASH_REGEX: Lazy<regex_lite::Regex> =
    Lazy::new(|| regex_lite::Regex::new(r"[0-9a-fA-F]{40,64}").unwrap());

/// Normalize a path for metric labels (replace entry ids with placeholders).
pub fn normalize_path(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("/module/book/") {
        if !rest.is_empty() {
            return "/module/book/{id}".to_string();
        }
    }
    if path.starts_with("/static/") {
        return "/static/{file}".to_string();
    }
    HASH_REGEX.replace_all(path, "{hash}").to_string()
}
