use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use voyara_catalog::{search, TripQuery};
use voyara_shared::Trip;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct SearchResponse {
    count: usize,
    results: Vec<Trip>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/trips", get(featured_trips))
        .route("/v1/trips/search", get(search_trips))
        .route("/v1/trips/{id}", get(get_trip))
}

/// Home rail: the first few trips in feed order.
async fn featured_trips(State(state): State<AppState>) -> Json<Vec<Trip>> {
    let limit = state.catalog_config.featured_limit;
    Json(state.catalog.featured(limit).to_vec())
}

/// Search the catalog. Parameters arrive as the storefront's query string
/// (`destination`, `duration`, `price`, `category`, `sort`); anything
/// unrecognized falls back to defaults rather than failing the request.
async fn search_trips(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<SearchResponse> {
    let query = TripQuery::from_params(&params);
    let results = search(&state.catalog, &query);
    tracing::debug!("Search returned {} of {} trips", results.len(), state.catalog.len());
    Json(SearchResponse {
        count: results.len(),
        results,
    })
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Trip>, ApiError> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Trip not found: {}", id)))
}
