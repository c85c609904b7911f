//! Item DTOs

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::ReportingPeriod;
use domain_items::{Category, ImageAttachment, Item, ItemFilter, ItemStatus, ReportItem};

use crate::error::ApiError;

/// Default filter window, matching the sidebar's "last 30 days"
const DEFAULT_FILTER_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct ReportItemRequest {
    pub category: Category,
    pub name: String,
    pub description: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub reporter: String,
    pub contact: String,
    /// Optional base64-encoded JPEG or PNG
    pub image: Option<String>,
}

impl ReportItemRequest {
    pub fn into_report(self) -> ReportItem {
        ReportItem {
            category: self.category,
            name: self.name,
            description: self.description,
            location: self.location,
            event_date: self.event_date,
            reporter: self.reporter,
            contact: self.contact,
            image: self.image.map(ImageAttachment::from_encoded),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportCreatedResponse {
    /// Reference id handed back to the reporter
    pub id: String,
}

/// Filter selectors for item listings
///
/// Absent selectors are wildcards, as are the literal "All Types" and
/// "All Statuses" options. The date range defaults to the last 30 days.
#[derive(Debug, Default, Deserialize)]
pub struct ItemFilterQuery {
    pub item_type: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ItemFilterQuery {
    pub fn into_filter(self, today: NaiveDate) -> Result<ItemFilter, ApiError> {
        let end = self.end_date.unwrap_or(today);
        let start = self
            .start_date
            .unwrap_or_else(|| end - Duration::days(DEFAULT_FILTER_DAYS));
        let mut filter = ItemFilter::for_period(ReportingPeriod::new(start, end)?);

        if let Some(category) = parse_category_selector(self.item_type.as_deref())? {
            filter = filter.with_category(category);
        }
        if let Some(status) = parse_status_selector(self.status.as_deref())? {
            filter = filter.with_status(status);
        }
        Ok(filter)
    }
}

/// Parses a category selector, treating "All Types" as the wildcard
pub(crate) fn parse_category_selector(raw: Option<&str>) -> Result<Option<Category>, ApiError> {
    match raw {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all types") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(ApiError::BadRequest),
    }
}

/// Parses a status selector, treating "All Statuses" as the wildcard
pub(crate) fn parse_status_selector(raw: Option<&str>) -> Result<Option<ItemStatus>, ApiError> {
    match raw {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all statuses") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(ApiError::BadRequest),
    }
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    /// "lost", "found", or "both" (default)
    pub scope: Option<String>,
    pub item_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub lost: Vec<ItemResponse>,
    pub found: Vec<ItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub kind: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub reported_on: NaiveDate,
    pub reporter: String,
    pub contact: String,
    pub status: String,
    pub has_image: bool,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            kind: item.kind.to_string(),
            category: item.category.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            location: item.location.clone(),
            event_date: item.event_date,
            reported_on: item.reported_on,
            reporter: item.reporter.clone(),
            contact: item.contact.clone(),
            status: item.status.to_string(),
            has_image: item.image.is_some(),
        }
    }
}
