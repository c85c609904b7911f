//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use domain_claims::{Claim, ClaimStatus};
use domain_items::{Item, ItemStatus};

/// Asserts that an item is in the expected status
pub fn assert_item_status(item: &Item, expected: ItemStatus) {
    assert_eq!(
        item.status, expected,
        "Item {} should be {}, was {}",
        item.id, expected, item.status
    );
}

/// Asserts that a claim is in the expected status
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "Claim {} should be {}, was {}",
        claim.id, expected, claim.status
    );
}

/// Asserts that two rates are equal within a tolerance
pub fn assert_rate_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Rates differ by more than tolerance: actual={actual}, expected={expected}, diff={diff}, tolerance={tolerance}"
    );
}

/// Asserts that a collection of items preserves the given name order
pub fn assert_name_order(items: &[&Item], expected: &[&str]) {
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, expected, "Items out of expected order");
}
