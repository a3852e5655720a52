//! Front-end page and fragment handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::debug;

use crate::render;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    #[serde(default)]
    pub cat: Option<String>,
}

impl CategoryParams {
    fn category(&self) -> &str {
        self.cat.as_deref().unwrap_or_default()
    }
}

/// GET /
///
/// Index page with the category nav. The list for the current category is
/// rendered in place so the page works without scripts.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> Html<String> {
    // Categories and entries must come from the same catalog.
    let snapshot = state.store().snapshot();
    let current = params.category();
    let entries = snapshot.get(Some(current));

    Html(render::index_page(&snapshot.categories(), current, &entries))
}

/// GET /module/books?cat=<category>
///
/// List fragment, all entries when `cat` is absent or empty.
pub async fn books(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> Html<String> {
    let entries = state.store().get(Some(params.category()));
    Html(render::books_fragment(&entries))
}

/// GET /module/book/{id}
pub async fn book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.store().get_by_id(&id) {
        Some(entry) => (StatusCode::OK, Html(render::book_fragment(&entry))),
        None => {
            debug!("Book {} not found", id);
            (
                StatusCode::NOT_FOUND,
                Html("<p class=\"error\">Book not found</p>\n".to_string()),
            )
        }
    }
}
