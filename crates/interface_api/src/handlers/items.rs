//! Item handlers

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use infra_store::workflow;

use crate::dto::items::{
    ItemFilterQuery, ItemResponse, RecentQuery, ReportCreatedResponse, ReportItemRequest,
};
use crate::error::ApiError;
use crate::handlers::{parse_item_id, parse_kind};
use crate::AppState;

const DEFAULT_RECENT_LIMIT: usize = 5;

/// Registers a new lost or found report
pub async fn report_item(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(request): Json<ReportItemRequest>,
) -> Result<(StatusCode, Json<ReportCreatedResponse>), ApiError> {
    let kind = parse_kind(&kind)?;
    let report = request.into_report();

    let mut store = state.store.write().await;
    let id = workflow::report_item(&mut store, kind, report, Utc::now().date_naive())?;

    Ok((
        StatusCode::CREATED,
        Json(ReportCreatedResponse { id: id.to_string() }),
    ))
}

/// Lists items matching the filter selectors
pub async fn list_items(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ItemFilterQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let kind = parse_kind(&kind)?;
    let filter = query.into_filter(Utc::now().date_naive())?;

    let store = state.store.read().await;
    let items = filter.apply(store.items(kind).all());

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// The most recently reported items of one kind
pub async fn recent_items(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let kind = parse_kind(&kind)?;
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);

    let store = state.store.read().await;
    let items = domain_items::filter::recent_items(store.items(kind).all(), limit);

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Fetches a single record by reference id
pub async fn get_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<ItemResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_item_id(&id)?;

    let store = state.store.read().await;
    let item = store
        .items(kind)
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Item {id} not found")))?;

    Ok(Json(ItemResponse::from(item)))
}

/// Decoded image bytes for display
///
/// A malformed blob yields a display error; the record itself stays
/// readable through the regular item endpoints.
pub async fn get_item_image(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_item_id(&id)?;

    let store = state.store.read().await;
    let item = store
        .items(kind)
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Item {id} not found")))?;
    let image = item
        .image
        .as_ref()
        .ok_or_else(|| ApiError::NotFound(format!("Item {id} has no image")))?;
    let decoded = image.decode()?;

    Ok((
        [(header::CONTENT_TYPE, decoded.format.content_type())],
        decoded.bytes,
    )
        .into_response())
}
