//! Comprehensive tests for domain_items

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::{ItemKind, ReportingPeriod};
use domain_items::filter::{recent_items, search_items, ItemFilter};
use domain_items::item::{Category, Item, ItemStatus, ReportItem};
use domain_items::stats::{recovery_rate, PeriodStatistics};
use domain_items::ItemError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn report(name: &str, description: &str, location: &str, category: Category) -> ReportItem {
    ReportItem {
        category,
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        event_date: date(2025, 1, 1),
        reporter: "Alex Reporter".to_string(),
        contact: "alex@example.com".to_string(),
        image: None,
    }
}

fn item_on(name: &str, category: Category, reported_on: NaiveDate) -> Item {
    Item::from_report(
        ItemKind::Lost,
        report(name, "a description", "somewhere", category),
        reported_on,
    )
    .unwrap()
}

// ============================================================================
// Item Tests
// ============================================================================

mod item_tests {
    use super::*;

    #[test]
    fn test_report_creates_open_item() {
        let item = Item::from_report(
            ItemKind::Lost,
            report("Keys", "House keys on a red ring", "Library", Category::Keys),
            date(2025, 1, 2),
        )
        .unwrap();

        assert_eq!(item.status, ItemStatus::Open);
        assert_eq!(item.kind, ItemKind::Lost);
        assert_eq!(item.category, Category::Keys);
        assert_eq!(item.event_date, date(2025, 1, 1));
        assert_eq!(item.reported_on, date(2025, 1, 2));
        assert!(item.is_claimable());
    }

    #[test]
    fn test_report_with_empty_name_is_rejected() {
        let result = Item::from_report(
            ItemKind::Lost,
            report("", "a description", "Library", Category::Keys),
            date(2025, 1, 2),
        );

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[test]
    fn test_report_with_empty_contact_is_rejected() {
        let mut submission = report("Keys", "a description", "Library", Category::Keys);
        submission.contact = String::new();

        let result = Item::from_report(ItemKind::Lost, submission, date(2025, 1, 2));

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[test]
    fn test_open_to_claimed_is_valid() {
        let mut item = item_on("Keys", Category::Keys, date(2025, 1, 2));

        assert!(item.update_status(ItemStatus::Claimed).is_ok());
        assert_eq!(item.status, ItemStatus::Claimed);
        assert!(!item.is_claimable());
    }

    #[test]
    fn test_claimed_to_returned_is_valid() {
        let mut item = item_on("Keys", Category::Keys, date(2025, 1, 2));
        item.update_status(ItemStatus::Claimed).unwrap();

        assert!(item.update_status(ItemStatus::Returned).is_ok());
    }

    #[test]
    fn test_claimed_back_to_open_is_valid() {
        let mut item = item_on("Keys", Category::Keys, date(2025, 1, 2));
        item.update_status(ItemStatus::Claimed).unwrap();

        assert!(item.update_status(ItemStatus::Open).is_ok());
        assert!(item.is_claimable());
    }

    #[test]
    fn test_open_directly_to_returned_is_valid() {
        // Administrative "mark returned" without a claim.
        let mut item = item_on("Keys", Category::Keys, date(2025, 1, 2));

        assert!(item.update_status(ItemStatus::Returned).is_ok());
    }

    #[test]
    fn test_any_state_can_close() {
        for initial in [ItemStatus::Open, ItemStatus::Claimed, ItemStatus::Returned] {
            let mut item = item_on("Keys", Category::Keys, date(2025, 1, 2));
            item.status = initial;

            assert!(item.update_status(ItemStatus::Closed).is_ok());
        }
    }

    #[test]
    fn test_closed_is_terminal() {
        let mut item = item_on("Keys", Category::Keys, date(2025, 1, 2));
        item.update_status(ItemStatus::Closed).unwrap();

        for target in [ItemStatus::Open, ItemStatus::Claimed, ItemStatus::Returned] {
            let result = item.update_status(target);
            assert!(
                matches!(result, Err(ItemError::InvalidStatusTransition { .. })),
                "Closed -> {target} should be rejected"
            );
        }
    }

    #[test]
    fn test_open_cannot_jump_straight_to_returned_via_claim_path() {
        let mut item = item_on("Keys", Category::Keys, date(2025, 1, 2));
        item.update_status(ItemStatus::Claimed).unwrap();
        item.update_status(ItemStatus::Returned).unwrap();

        // Returned never goes back to Claimed.
        assert!(item.update_status(ItemStatus::Claimed).is_err());
    }

    #[test]
    fn test_status_labels_round_trip() {
        for status in ItemStatus::all() {
            let parsed: ItemStatus = status.to_string().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::all() {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(*category, parsed);
        }
        assert!("Umbrellas".parse::<Category>().is_err());
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filter_tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            item_on("Phone", Category::Electronics, date(2025, 1, 10)),
            item_on("Scarf", Category::Clothing, date(2025, 1, 15)),
            item_on("Passport", Category::Documents, date(2025, 2, 1)),
        ]
    }

    #[test]
    fn test_wildcard_filter_returns_everything_in_order() {
        let items = sample_items();
        let period = ReportingPeriod::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();

        let result = ItemFilter::for_period(period).apply(&items);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].name, "Phone");
        assert_eq!(result[1].name, "Scarf");
        assert_eq!(result[2].name, "Passport");
    }

    #[test]
    fn test_category_selector_narrows() {
        let items = sample_items();
        let period = ReportingPeriod::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();

        let result = ItemFilter::for_period(period)
            .with_category(Category::Clothing)
            .apply(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Scarf");
    }

    #[test]
    fn test_status_selector_narrows() {
        let mut items = sample_items();
        items[0].update_status(ItemStatus::Claimed).unwrap();
        let period = ReportingPeriod::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();

        let result = ItemFilter::for_period(period)
            .with_status(ItemStatus::Claimed)
            .apply(&items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Phone");
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let items = sample_items();
        let period = ReportingPeriod::new(date(2025, 1, 10), date(2025, 1, 15)).unwrap();

        let result = ItemFilter::for_period(period).apply(&items);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Phone");
        assert_eq!(result[1].name, "Scarf");
    }

    #[test]
    fn test_empty_result_is_valid() {
        let items = sample_items();
        let period = ReportingPeriod::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();

        assert!(ItemFilter::for_period(period).apply(&items).is_empty());
    }
}

// ============================================================================
// Search Tests
// ============================================================================

mod search_tests {
    use super::*;

    fn searchable_items() -> Vec<Item> {
        vec![
            Item::from_report(
                ItemKind::Lost,
                report("Wallet", "Brown leather Wallet", "Cafe", Category::Other),
                date(2025, 1, 10),
            )
            .unwrap(),
            Item::from_report(
                ItemKind::Lost,
                report("Backpack", "Black backpack", "Bus stop", Category::Bags),
                date(2025, 1, 11),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let items = searchable_items();

        let result = search_items(&items, "wallet", None);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "Brown leather Wallet");
    }

    #[test]
    fn test_keyword_matches_location() {
        let items = searchable_items();

        let result = search_items(&items, "BUS STOP", None);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Backpack");
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let items = searchable_items();

        assert_eq!(search_items(&items, "", None).len(), 2);
    }

    #[test]
    fn test_category_selector_applies_to_search() {
        let items = searchable_items();

        let result = search_items(&items, "b", Some(Category::Bags));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Backpack");
    }

    #[test]
    fn test_recent_sorts_by_report_date_descending() {
        let items = vec![
            item_on("oldest", Category::Other, date(2025, 1, 1)),
            item_on("newest", Category::Other, date(2025, 3, 1)),
            item_on("middle", Category::Other, date(2025, 2, 1)),
        ];

        let result = recent_items(&items, 2);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "newest");
        assert_eq!(result[1].name, "middle");
    }

    #[test]
    fn test_recent_keeps_input_order_on_ties() {
        let items = vec![
            item_on("first", Category::Other, date(2025, 1, 1)),
            item_on("second", Category::Other, date(2025, 1, 1)),
        ];

        let result = recent_items(&items, 5);

        assert_eq!(result[0].name, "first");
        assert_eq!(result[1].name, "second");
    }
}

// ============================================================================
// Statistics Tests
// ============================================================================

mod stats_tests {
    use super::*;

    #[test]
    fn test_empty_collection_has_zero_rate() {
        let stats = PeriodStatistics::for_items([]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.returned, 0);
        assert_eq!(stats.recovery_rate, 0.0);
        assert!(stats.by_category.is_empty());
        assert!(stats.by_status.is_empty());
    }

    #[test]
    fn test_recovery_rate_is_exact() {
        let mut items = vec![
            item_on("a", Category::Keys, date(2025, 1, 1)),
            item_on("b", Category::Keys, date(2025, 1, 2)),
            item_on("c", Category::Bags, date(2025, 1, 3)),
            item_on("d", Category::Bags, date(2025, 1, 4)),
        ];
        items[0].update_status(ItemStatus::Returned).unwrap();

        let stats = PeriodStatistics::for_items(&items);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.returned, 1);
        assert!((stats.recovery_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_histogram_sorted_by_count() {
        let items = vec![
            item_on("a", Category::Keys, date(2025, 1, 1)),
            item_on("b", Category::Bags, date(2025, 1, 2)),
            item_on("c", Category::Bags, date(2025, 1, 3)),
        ];

        let stats = PeriodStatistics::for_items(&items);

        assert_eq!(stats.by_category.len(), 2);
        assert_eq!(stats.by_category[0].category, Category::Bags);
        assert_eq!(stats.by_category[0].count, 2);
        assert_eq!(stats.by_category[1].category, Category::Keys);
    }

    #[test]
    fn test_histogram_ties_keep_first_encountered_order() {
        let items = vec![
            item_on("a", Category::Jewelry, date(2025, 1, 1)),
            item_on("b", Category::Electronics, date(2025, 1, 2)),
        ];

        let stats = PeriodStatistics::for_items(&items);

        assert_eq!(stats.by_category[0].category, Category::Jewelry);
        assert_eq!(stats.by_category[1].category, Category::Electronics);
    }

    #[test]
    fn test_status_histogram_counts_all_present_statuses() {
        let mut items = vec![
            item_on("a", Category::Keys, date(2025, 1, 1)),
            item_on("b", Category::Keys, date(2025, 1, 2)),
            item_on("c", Category::Keys, date(2025, 1, 3)),
        ];
        items[2].update_status(ItemStatus::Returned).unwrap();

        let stats = PeriodStatistics::for_items(&items);

        assert_eq!(stats.by_status.len(), 2);
        assert_eq!(stats.by_status[0].status, ItemStatus::Open);
        assert_eq!(stats.by_status[0].count, 2);
        assert_eq!(stats.by_status[1].status, ItemStatus::Returned);
        assert_eq!(stats.by_status[1].count, 1);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_recovery_rate_stays_within_bounds(returned in 0usize..500, extra in 0usize..500) {
        let total = returned + extra;
        let rate = recovery_rate(returned, total);

        prop_assert!((0.0..=100.0).contains(&rate));
    }

    #[test]
    fn prop_wildcard_filter_over_spanning_period_keeps_everything(count in 0usize..50) {
        let items: Vec<Item> = (0..count)
            .map(|i| item_on(&format!("item-{i}"), Category::Other, date(2025, 1, 1 + (i % 28) as u32)))
            .collect();
        let period = ReportingPeriod::new(date(2025, 1, 1), date(2025, 12, 31)).unwrap();

        let result = ItemFilter::for_period(period).apply(&items);

        prop_assert_eq!(result.len(), items.len());
    }
}
