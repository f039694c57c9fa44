use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use super::repo_types::HistoryEntry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_name: String,
    pub entries: Vec<HistoryEntry>,
}

pub fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(search_query).post(search_form))
}

/// GET /search?name=...
pub async fn search_query(
    state: State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    search(state, req).await
}

/// POST /search (form-encoded)
pub async fn search_form(
    state: State<AppState>,
    Form(req): Form<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    search(state, req).await
}

#[instrument(skip(state))]
async fn search(
    State(state): State<AppState>,
    req: SearchRequest,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let Some(name) = req.name else {
        return Err((StatusCode::BAD_REQUEST, "Error: missing field 'name'".into()));
    };

    let entries = state.history.find_by_name(&name).await.map_err(|e| {
        error!(error = %e, "history search failed");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}"))
    })?;

    info!(matches = entries.len(), "history search");
    Ok(Json(SearchResponse {
        search_name: name,
        entries,
    }))
}
