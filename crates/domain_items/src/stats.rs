//! Statistics aggregation over filtered item collections

use serde::Serialize;

use crate::item::{Category, Item, ItemStatus};

/// Count of items in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Count of items in one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ItemStatus,
    pub count: usize,
}

/// Summary statistics for a date-range-filtered collection
///
/// All counts are exact tallies over the input. Histograms contain only
/// the categories and statuses actually present, sorted descending by
/// count; ties keep first-encountered order.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodStatistics {
    pub total: usize,
    pub returned: usize,
    /// Percentage of items that reached Returned, 0 for an empty input
    pub recovery_rate: f64,
    pub by_category: Vec<CategoryCount>,
    pub by_status: Vec<StatusCount>,
}

impl PeriodStatistics {
    /// Aggregates statistics over the given items
    pub fn for_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut total = 0usize;
        let mut returned = 0usize;
        let mut categories: Vec<(Category, usize)> = Vec::new();
        let mut statuses: Vec<(ItemStatus, usize)> = Vec::new();

        for item in items {
            total += 1;
            if item.status == ItemStatus::Returned {
                returned += 1;
            }
            tally(&mut categories, item.category);
            tally(&mut statuses, item.status);
        }

        sort_descending(&mut categories);
        sort_descending(&mut statuses);

        Self {
            total,
            returned,
            recovery_rate: recovery_rate(returned, total),
            by_category: categories
                .into_iter()
                .map(|(category, count)| CategoryCount { category, count })
                .collect(),
            by_status: statuses
                .into_iter()
                .map(|(status, count)| StatusCount { status, count })
                .collect(),
        }
    }
}

/// Percentage of items returned, defined as 0 when the input is empty
pub fn recovery_rate(returned: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        returned as f64 * 100.0 / total as f64
    }
}

fn tally<K: PartialEq + Copy>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(k, _)| *k == key) {
        Some((_, count)) => *count += 1,
        None => counts.push((key, 1)),
    }
}

// Stable sort keeps first-encountered order for equal counts.
fn sort_descending<K>(counts: &mut [(K, usize)]) {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
}
