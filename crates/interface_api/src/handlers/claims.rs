//! Claims handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use infra_store::workflow;

use crate::dto::claims::{
    ClaimCreatedResponse, HandoffRequest, HandoffResponse, SubmitClaimRequest,
};
use crate::error::ApiError;
use crate::AppState;

/// Submits a claim against an Open item
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimCreatedResponse>), ApiError> {
    let submission = request.into_submission()?;

    let mut store = state.store.write().await;
    let id = workflow::submit_claim(&mut store, submission, Utc::now().date_naive())?;

    Ok((
        StatusCode::CREATED,
        Json(ClaimCreatedResponse { id: id.to_string() }),
    ))
}

/// Stages a search result for the next claim-form render
///
/// The slot holds one target; staging again overwrites it.
pub async fn stage_handoff(
    State(state): State<AppState>,
    Json(request): Json<HandoffRequest>,
) -> Result<StatusCode, ApiError> {
    let target = request.into_target()?;

    let mut store = state.store.write().await;
    store.handoff.stage(target);

    Ok(StatusCode::NO_CONTENT)
}

/// Consumes the staged claim target
///
/// Read-once: the first call after staging returns the target and clears
/// the slot; further calls find nothing.
pub async fn take_handoff(
    State(state): State<AppState>,
) -> Result<Json<HandoffResponse>, ApiError> {
    let mut store = state.store.write().await;
    let target = store
        .handoff
        .take()
        .ok_or_else(|| ApiError::NotFound("No claim target staged".to_string()))?;

    Ok(Json(HandoffResponse::from(target)))
}
