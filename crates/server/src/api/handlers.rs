use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use bookshelf_core::RefreshStatus;

use crate::metrics::{collect_dynamic_metrics, encode_metrics};
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub entries: usize,
    pub categories: usize,
    pub catalog_built_at: DateTime<Utc>,
    pub refresh: RefreshStatus,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot = state.store().snapshot();
    Json(HealthResponse {
        status: "ok".to_string(),
        entries: snapshot.len(),
        categories: snapshot.categories().len(),
        catalog_built_at: snapshot.built_at(),
        refresh: state.refresher().status().await,
    })
}

/// GET /metrics
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    collect_dynamic_metrics(&state).await;
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
