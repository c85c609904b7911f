//! Reporting DTOs

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::{ItemKind, ReportingPeriod};
use domain_items::PeriodStatistics;

use crate::error::ApiError;
use crate::handlers::parse_kind;

/// Default reporting window, matching the sidebar's "last 90 days"
const DEFAULT_REPORT_DAYS: i64 = 90;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Which collection the report covers: "lost" or "found"
    pub kind: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReportQuery {
    pub fn kind(&self) -> Result<ItemKind, ApiError> {
        parse_kind(&self.kind)
    }

    pub fn period(&self, today: NaiveDate) -> Result<ReportingPeriod, ApiError> {
        let end = self.end_date.unwrap_or(today);
        let start = self
            .start_date
            .unwrap_or_else(|| end - Duration::days(DEFAULT_REPORT_DAYS));
        Ok(ReportingPeriod::new(start, end)?)
    }
}

#[derive(Debug, Serialize)]
pub struct HistogramEntry {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub kind: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total: usize,
    pub returned: usize,
    pub recovery_rate: f64,
    pub by_category: Vec<HistogramEntry>,
    pub by_status: Vec<HistogramEntry>,
}

impl StatisticsResponse {
    pub fn new(kind: ItemKind, period: ReportingPeriod, stats: &PeriodStatistics) -> Self {
        Self {
            kind: kind.to_string(),
            start_date: period.start,
            end_date: period.end,
            total: stats.total,
            returned: stats.returned,
            recovery_rate: stats.recovery_rate,
            by_category: stats
                .by_category
                .iter()
                .map(|entry| HistogramEntry {
                    label: entry.category.to_string(),
                    count: entry.count,
                })
                .collect(),
            by_status: stats
                .by_status
                .iter()
                .map(|entry| HistogramEntry {
                    label: entry.status.to_string(),
                    count: entry.count,
                })
                .collect(),
        }
    }
}
