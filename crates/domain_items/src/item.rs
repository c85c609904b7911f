//! Item aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use core_kernel::{ItemId, ItemKind};
use crate::error::ItemError;
use crate::image::ImageAttachment;

/// Item category, as offered on the report forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Documents,
    Keys,
    Bags,
    Jewelry,
    Other,
}

impl Category {
    /// All categories, in form order
    pub fn all() -> &'static [Category] {
        &[
            Category::Electronics,
            Category::Clothing,
            Category::Documents,
            Category::Keys,
            Category::Bags,
            Category::Jewelry,
            Category::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Documents => "Documents",
            Category::Keys => "Keys",
            Category::Bags => "Bags",
            Category::Jewelry => "Jewelry",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Item status
///
/// Transitions are driven by the claim workflow and administrative
/// actions; `update_status` rejects anything outside the table in
/// `can_transition_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Reported and available for claiming
    Open,
    /// A pending claim exists against the item
    Claimed,
    /// Reunited with its owner
    Returned,
    /// Administratively closed; terminal
    Closed,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Open => "Open",
            ItemStatus::Claimed => "Claimed",
            ItemStatus::Returned => "Returned",
            ItemStatus::Closed => "Closed",
        }
    }

    /// All statuses, in display order
    pub fn all() -> &'static [ItemStatus] {
        &[
            ItemStatus::Open,
            ItemStatus::Claimed,
            ItemStatus::Returned,
            ItemStatus::Closed,
        ]
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemStatus::all()
            .iter()
            .copied()
            .find(|st| st.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown status: {s}"))
    }
}

/// A validated report submission
///
/// Every field is mandatory on the report forms; a submission that fails
/// validation creates no record at all.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportItem {
    pub category: Category,
    #[validate(length(min = 1, message = "item name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    /// Date the item was lost or found
    pub event_date: NaiveDate,
    #[validate(length(min = 1, message = "reporter name is required"))]
    pub reporter: String,
    #[validate(length(min = 1, message = "contact information is required"))]
    pub contact: String,
    /// Optional image of the item
    pub image: Option<ImageAttachment>,
}

/// A lost or found item record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within its collection
    pub id: ItemId,
    /// Which collection the record lives in
    pub kind: ItemKind,
    pub category: Category,
    pub name: String,
    pub description: String,
    /// Where the item was last seen or found
    pub location: String,
    /// Date lost (for lost items) or date found (for found items)
    pub event_date: NaiveDate,
    /// Date the report was submitted
    pub reported_on: NaiveDate,
    pub reporter: String,
    pub contact: String,
    pub status: ItemStatus,
    pub image: Option<ImageAttachment>,
}

impl Item {
    /// Creates a new Open item from a validated report
    ///
    /// # Errors
    ///
    /// Returns `ItemError::Validation` when a mandatory field is empty;
    /// no record is created in that case.
    pub fn from_report(
        kind: ItemKind,
        report: ReportItem,
        reported_on: NaiveDate,
    ) -> Result<Self, ItemError> {
        report
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        Ok(Self {
            id: ItemId::new_v7(),
            kind,
            category: report.category,
            name: report.name,
            description: report.description,
            location: report.location,
            event_date: report.event_date,
            reported_on,
            reporter: report.reporter,
            contact: report.contact,
            status: ItemStatus::Open,
            image: report.image,
        })
    }

    /// Updates the status
    pub fn update_status(&mut self, status: ItemStatus) -> Result<(), ItemError> {
        if !self.can_transition_to(status) {
            return Err(ItemError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: status.to_string(),
            });
        }
        self.status = status;
        Ok(())
    }

    /// Returns true if the item is available for claiming
    pub fn is_claimable(&self) -> bool {
        self.status == ItemStatus::Open
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ItemStatus) -> bool {
        use ItemStatus::*;
        matches!(
            (self.status, target),
            (Open, Claimed) |
            (Claimed, Returned) |
            (Claimed, Open) |
            (Open, Returned) |
            (Returned, Returned) |
            (_, Closed)
        )
    }
}
