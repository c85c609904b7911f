//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::ItemKind;
use domain_items::{Category, Item, ItemStatus};

use crate::builders::TestItemBuilder;

/// Strategy for generating valid Category values
pub fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Electronics),
        Just(Category::Clothing),
        Just(Category::Documents),
        Just(Category::Keys),
        Just(Category::Bags),
        Just(Category::Jewelry),
        Just(Category::Other),
    ]
}

/// Strategy for generating valid ItemStatus values
pub fn item_status_strategy() -> impl Strategy<Value = ItemStatus> {
    prop_oneof![
        Just(ItemStatus::Open),
        Just(ItemStatus::Claimed),
        Just(ItemStatus::Returned),
        Just(ItemStatus::Closed),
    ]
}

/// Strategy for generating collection kinds
pub fn item_kind_strategy() -> impl Strategy<Value = ItemKind> {
    prop_oneof![Just(ItemKind::Lost), Just(ItemKind::Found)]
}

/// Strategy for report dates within 2025
pub fn report_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1u32..=12, 1u32..=28).prop_map(|(month, day)| {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    })
}

/// Strategy for whole item records with random category, status, and dates
pub fn item_strategy() -> impl Strategy<Value = Item> {
    (
        item_kind_strategy(),
        category_strategy(),
        item_status_strategy(),
        report_date_strategy(),
    )
        .prop_map(|(kind, category, status, reported_on)| {
            TestItemBuilder::new()
                .with_kind(kind)
                .with_category(category)
                .with_status(status)
                .with_reported_on(reported_on)
                .build()
        })
}
