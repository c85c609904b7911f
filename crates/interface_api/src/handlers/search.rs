//! Search handlers

use axum::extract::{Query, State};
use axum::Json;

use domain_items::filter::search_items;

use crate::dto::items::{parse_category_selector, ItemResponse, SearchQuery, SearchResponse};
use crate::error::ApiError;
use crate::AppState;

/// Keyword search across the lost and found collections
///
/// The keyword matches case-insensitively against name, description, and
/// location; `scope` narrows the search to one collection.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let scope = query.scope.as_deref().unwrap_or("both");
    let (include_lost, include_found) = match scope {
        "lost" => (true, false),
        "found" => (false, true),
        "both" => (true, true),
        other => {
            return Err(ApiError::BadRequest(format!(
                "unknown search scope: {other}"
            )))
        }
    };
    let category = parse_category_selector(query.item_type.as_deref())?;
    let keyword = query.keyword.unwrap_or_default();

    let store = state.store.read().await;
    let lost = if include_lost {
        search_items(store.lost.all(), &keyword, category)
            .into_iter()
            .map(ItemResponse::from)
            .collect()
    } else {
        Vec::new()
    };
    let found = if include_found {
        search_items(store.found.all(), &keyword, category)
            .into_iter()
            .map(ItemResponse::from)
            .collect()
    } else {
        Vec::new()
    };

    Ok(Json(SearchResponse { lost, found }))
}
