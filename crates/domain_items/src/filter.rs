//! Filtering and keyword search over item collections
//!
//! Both operations are linear scans that preserve the input order of the
//! collection; an empty result is a normal outcome, not an error.

use core_kernel::ReportingPeriod;

use crate::item::{Category, Item, ItemStatus};

/// Filter criteria for item listings
///
/// `None` selectors are wildcards, matching the "All Types" and
/// "All Statuses" options on the filter controls. The date range applies
/// to the report date with inclusive bounds.
#[derive(Debug, Clone, Copy)]
pub struct ItemFilter {
    pub category: Option<Category>,
    pub status: Option<ItemStatus>,
    pub period: ReportingPeriod,
}

impl ItemFilter {
    /// Creates a filter with wildcard selectors over the given period
    pub fn for_period(period: ReportingPeriod) -> Self {
        Self {
            category: None,
            status: None,
            period,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if the item satisfies every criterion
    pub fn matches(&self, item: &Item) -> bool {
        let category_match = self.category.map_or(true, |c| item.category == c);
        let status_match = self.status.map_or(true, |s| item.status == s);
        category_match && status_match && self.period.contains(item.reported_on)
    }

    /// Retains the matching items, preserving input order
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let matched: Vec<&Item> = items.iter().filter(|item| self.matches(item)).collect();
        tracing::debug!(
            matched = matched.len(),
            scanned = items.len(),
            "applied item filter"
        );
        matched
    }
}

/// Case-insensitive keyword search over name, description, and location
///
/// A keyword matches when it occurs as a substring of any of the three
/// fields. The empty keyword matches every item. The optional category
/// selector narrows the scan; order is preserved.
pub fn search_items<'a>(
    items: &'a [Item],
    keyword: &str,
    category: Option<Category>,
) -> Vec<&'a Item> {
    let needle = keyword.to_lowercase();
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.location.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The `limit` most recently reported items
///
/// Sorted by report date descending; ties keep their input order.
pub fn recent_items(items: &[Item], limit: usize) -> Vec<&Item> {
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by(|a, b| b.reported_on.cmp(&a.reported_on));
    ordered.truncate(limit);
    ordered
}
