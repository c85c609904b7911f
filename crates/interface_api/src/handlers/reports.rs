//! Statistics and export handlers

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use core_kernel::ItemKind;
use domain_items::{export_csv, ItemFilter, PeriodStatistics};

use crate::dto::reports::{ReportQuery, StatisticsResponse};
use crate::error::ApiError;
use crate::AppState;

/// Summary statistics for one collection over a reporting period
pub async fn statistics(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    let kind = query.kind()?;
    let period = query.period(Utc::now().date_naive())?;

    let store = state.store.read().await;
    let items = ItemFilter::for_period(period).apply(store.items(kind).all());
    let stats = PeriodStatistics::for_items(items);

    Ok(Json(StatisticsResponse::new(kind, period, &stats)))
}

/// CSV export of a filtered collection, served as a download
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, ApiError> {
    let kind = query.kind()?;
    let period = query.period(Utc::now().date_naive())?;

    let store = state.store.read().await;
    let items = ItemFilter::for_period(period).apply(store.items(kind).all());
    let csv = export_csv(kind, items);

    let filename = match kind {
        ItemKind::Lost => "lost_items_report.csv",
        ItemKind::Found => "found_items_report.csv",
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
