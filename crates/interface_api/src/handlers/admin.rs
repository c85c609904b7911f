//! Administrative handlers
//!
//! Every route in this module sits behind the shared-secret middleware;
//! requests only reach these handlers once the secret has been verified.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use infra_store::workflow;

use crate::dto::claims::{AdjudicationResponse, ClaimResponse};
use crate::error::ApiError;
use crate::handlers::{parse_claim_id, parse_item_id, parse_kind};
use crate::AppState;

/// Lists every claim on file
pub async fn list_claims(State(state): State<AppState>) -> Json<Vec<ClaimResponse>> {
    let store = state.store.read().await;
    Json(store.claims.all().iter().map(ClaimResponse::from).collect())
}

/// Approves a Pending claim, marking the claimed item Returned
pub async fn approve_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AdjudicationResponse>, ApiError> {
    let id = parse_claim_id(&id)?;

    let mut store = state.store.write().await;
    let record = workflow::approve_claim(&mut store, id, Utc::now().date_naive())?;

    Ok(Json(AdjudicationResponse::from(record)))
}

/// Rejects a Pending claim, reopening the claimed item
pub async fn reject_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AdjudicationResponse>, ApiError> {
    let id = parse_claim_id(&id)?;

    let mut store = state.store.write().await;
    let record = workflow::reject_claim(&mut store, id, Utc::now().date_naive())?;

    Ok(Json(AdjudicationResponse::from(record)))
}

/// Deletes a claim outright; the referenced item is untouched
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_claim_id(&id)?;

    let mut store = state.store.write().await;
    workflow::delete_claim(&mut store, id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Marks an item Returned without going through a claim
pub async fn return_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_item_id(&id)?;

    let mut store = state.store.write().await;
    workflow::mark_returned(&mut store, kind, id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Closes an item; Closed is terminal
pub async fn close_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_item_id(&id)?;

    let mut store = state.store.write().await;
    workflow::mark_closed(&mut store, kind, id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an item; claims referencing it are left dangling
pub async fn delete_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_item_id(&id)?;

    let mut store = state.store.write().await;
    workflow::delete_item(&mut store, kind, id)?;

    Ok(StatusCode::NO_CONTENT)
}
