//! Workflow and repository tests for infra_store

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::{ItemId, ItemKind};
use domain_claims::{ClaimStatus, SubmitClaim};
use domain_items::ItemStatus;
use infra_store::workflow::{
    approve_claim, delete_claim, delete_item, mark_closed, mark_returned, report_item,
    reject_claim, submit_claim,
};
use infra_store::{SessionStore, WorkflowError};
use test_utils::{
    assert_claim_status, assert_item_status, item_strategy, ReportFixtures, TemporalFixtures,
    TestItemBuilder,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn submission_for(item_id: ItemId, kind: ItemKind) -> SubmitClaim {
    SubmitClaim {
        item_id,
        item_kind: kind,
        claimant: "Jordan Smith".to_string(),
        contact: "jordan@example.com".to_string(),
        proof: "Described the scratches on the back".to_string(),
    }
}

/// Reports a found backpack and returns its id
fn seed_found_item(store: &mut SessionStore) -> ItemId {
    report_item(
        store,
        ItemKind::Found,
        ReportFixtures::found_backpack(),
        TemporalFixtures::report_date(),
    )
    .unwrap()
}

// ============================================================================
// Repository Tests
// ============================================================================

mod repository_tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = SessionStore::new();
        let first = TestItemBuilder::new().with_name("first").build();
        let second = TestItemBuilder::new().with_name("second").build();

        store.lost.add(first).unwrap();
        store.lost.add(second).unwrap();

        let names: Vec<&str> = store.lost.all().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let mut store = SessionStore::new();
        let item = TestItemBuilder::new().build();
        let duplicate = TestItemBuilder::new().with_id(item.id).build();

        store.found.add(item).unwrap();
        let result = store.found.add(duplicate);

        assert!(result.is_err());
        assert_eq!(store.found.len(), 1);
    }

    #[test]
    fn test_lookup_by_identifier() {
        let mut store = SessionStore::new();
        let item = TestItemBuilder::new().with_name("target").build();
        let id = item.id;
        store.lost.add(item).unwrap();
        store.lost.add(TestItemBuilder::new().build()).unwrap();

        assert_eq!(store.lost.get(&id).unwrap().name, "target");
        assert!(store.lost.get(&ItemId::new()).is_none());
    }

    #[test]
    fn test_remove_returns_the_record() {
        let mut store = SessionStore::new();
        let item = TestItemBuilder::new().build();
        let id = item.id;
        store.lost.add(item).unwrap();

        let removed = store.lost.remove(&id);

        assert!(removed.is_some());
        assert!(store.lost.is_empty());
        assert!(store.lost.remove(&id).is_none());
    }

    #[test]
    fn test_collections_are_independent() {
        let mut store = SessionStore::new();
        let item = TestItemBuilder::new().with_kind(ItemKind::Lost).build();
        let id = item.id;
        store.lost.add(item).unwrap();

        assert!(store.items(ItemKind::Lost).get(&id).is_some());
        assert!(store.items(ItemKind::Found).get(&id).is_none());
    }
}

// ============================================================================
// Claim Submission Tests
// ============================================================================

mod submission_tests {
    use super::*;

    #[test]
    fn test_submit_against_open_item() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);

        let claim_id = submit_claim(
            &mut store,
            submission_for(item_id, ItemKind::Found),
            date(2025, 1, 5),
        )
        .unwrap();

        let claim = store.claims.get(&claim_id).unwrap();
        assert_claim_status(claim, ClaimStatus::Pending);
        assert_eq!(claim.item_id, item_id);
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Claimed);
    }

    #[test]
    fn test_submit_against_missing_item_creates_nothing() {
        let mut store = SessionStore::new();
        seed_found_item(&mut store);

        let result = submit_claim(
            &mut store,
            submission_for(ItemId::new(), ItemKind::Found),
            date(2025, 1, 5),
        );

        assert!(matches!(result, Err(WorkflowError::ItemUnavailable { .. })));
        assert!(store.claims.is_empty());
        assert_item_status(&store.found.all()[0], ItemStatus::Open);
    }

    #[test]
    fn test_submit_against_wrong_collection_creates_nothing() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);

        // Right id, wrong collection tag.
        let result = submit_claim(
            &mut store,
            submission_for(item_id, ItemKind::Lost),
            date(2025, 1, 5),
        );

        assert!(matches!(result, Err(WorkflowError::ItemUnavailable { .. })));
        assert!(store.claims.is_empty());
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Open);
    }

    #[test]
    fn test_submit_against_non_open_item_creates_nothing() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);
        submit_claim(
            &mut store,
            submission_for(item_id, ItemKind::Found),
            date(2025, 1, 5),
        )
        .unwrap();

        // The item is now Claimed; a second claim must be refused.
        let result = submit_claim(
            &mut store,
            submission_for(item_id, ItemKind::Found),
            date(2025, 1, 6),
        );

        assert!(matches!(result, Err(WorkflowError::ItemUnavailable { .. })));
        assert_eq!(store.claims.len(), 1);
    }

    #[test]
    fn test_invalid_submission_mutates_nothing() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);
        let mut submission = submission_for(item_id, ItemKind::Found);
        submission.proof = String::new();

        let result = submit_claim(&mut store, submission, date(2025, 1, 5));

        assert!(matches!(result, Err(WorkflowError::Claim(_))));
        assert!(store.claims.is_empty());
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Open);
    }
}

// ============================================================================
// Adjudication Tests
// ============================================================================

mod adjudication_tests {
    use super::*;

    fn store_with_pending_claim() -> (SessionStore, ItemId, core_kernel::ClaimId) {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);
        let claim_id = submit_claim(
            &mut store,
            submission_for(item_id, ItemKind::Found),
            date(2025, 1, 5),
        )
        .unwrap();
        (store, item_id, claim_id)
    }

    #[test]
    fn test_approval_returns_the_item() {
        let (mut store, item_id, claim_id) = store_with_pending_claim();

        let record = approve_claim(&mut store, claim_id, date(2025, 1, 10)).unwrap();

        assert!(record.item_updated);
        assert_claim_status(store.claims.get(&claim_id).unwrap(), ClaimStatus::Approved);
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Returned);
    }

    #[test]
    fn test_rejection_reopens_the_item() {
        let (mut store, item_id, claim_id) = store_with_pending_claim();

        let record = reject_claim(&mut store, claim_id, date(2025, 1, 10)).unwrap();

        assert!(record.item_updated);
        assert_claim_status(store.claims.get(&claim_id).unwrap(), ClaimStatus::Rejected);
        let item = store.found.get(&item_id).unwrap();
        assert_item_status(item, ItemStatus::Open);
        assert!(item.is_claimable());
    }

    #[test]
    fn test_adjudicating_a_settled_claim_changes_nothing() {
        let (mut store, item_id, claim_id) = store_with_pending_claim();
        approve_claim(&mut store, claim_id, date(2025, 1, 10)).unwrap();

        let again = approve_claim(&mut store, claim_id, date(2025, 1, 11));
        let flipped = reject_claim(&mut store, claim_id, date(2025, 1, 11));

        assert!(matches!(again, Err(WorkflowError::Claim(_))));
        assert!(matches!(flipped, Err(WorkflowError::Claim(_))));
        assert_claim_status(store.claims.get(&claim_id).unwrap(), ClaimStatus::Approved);
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Returned);
    }

    #[test]
    fn test_approving_unknown_claim_fails() {
        let mut store = SessionStore::new();

        let result = approve_claim(&mut store, core_kernel::ClaimId::new(), date(2025, 1, 10));

        assert!(matches!(result, Err(WorkflowError::Store(_))));
    }

    #[test]
    fn test_approval_survives_a_deleted_item() {
        let (mut store, item_id, claim_id) = store_with_pending_claim();
        delete_item(&mut store, ItemKind::Found, item_id).unwrap();

        let record = approve_claim(&mut store, claim_id, date(2025, 1, 10)).unwrap();

        // The claim-side decision stands; the item update is reported skipped.
        assert!(!record.item_updated);
        assert_claim_status(store.claims.get(&claim_id).unwrap(), ClaimStatus::Approved);
    }

    #[test]
    fn test_rejection_skips_item_closed_in_the_meantime() {
        let (mut store, item_id, claim_id) = store_with_pending_claim();
        mark_closed(&mut store, ItemKind::Found, item_id).unwrap();

        let record = reject_claim(&mut store, claim_id, date(2025, 1, 10)).unwrap();

        assert!(!record.item_updated);
        assert_claim_status(store.claims.get(&claim_id).unwrap(), ClaimStatus::Rejected);
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Closed);
    }
}

// ============================================================================
// Administrative Action Tests
// ============================================================================

mod admin_tests {
    use super::*;

    #[test]
    fn test_mark_returned_without_a_claim() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);

        mark_returned(&mut store, ItemKind::Found, item_id).unwrap();

        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Returned);
    }

    #[test]
    fn test_mark_closed_is_terminal() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);
        mark_closed(&mut store, ItemKind::Found, item_id).unwrap();

        let result = mark_returned(&mut store, ItemKind::Found, item_id);

        assert!(matches!(result, Err(WorkflowError::Item(_))));
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Closed);
    }

    #[test]
    fn test_delete_item_leaves_claims_dangling() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);
        let claim_id = submit_claim(
            &mut store,
            submission_for(item_id, ItemKind::Found),
            date(2025, 1, 5),
        )
        .unwrap();

        delete_item(&mut store, ItemKind::Found, item_id).unwrap();

        assert!(store.found.get(&item_id).is_none());
        // The claim keeps its reference to the vanished item.
        assert_eq!(store.claims.get(&claim_id).unwrap().item_id, item_id);
    }

    #[test]
    fn test_delete_claim_has_no_item_side_effect() {
        let mut store = SessionStore::new();
        let item_id = seed_found_item(&mut store);
        let claim_id = submit_claim(
            &mut store,
            submission_for(item_id, ItemKind::Found),
            date(2025, 1, 5),
        )
        .unwrap();

        delete_claim(&mut store, claim_id).unwrap();

        assert!(store.claims.is_empty());
        // The item stays Claimed; deleting the claim is not a rejection.
        assert_item_status(store.found.get(&item_id).unwrap(), ItemStatus::Claimed);
    }

    #[test]
    fn test_delete_missing_item_fails() {
        let mut store = SessionStore::new();

        let result = delete_item(&mut store, ItemKind::Lost, ItemId::new());

        assert!(matches!(result, Err(WorkflowError::Store(_))));
    }
}

// ============================================================================
// Walkthrough Scenario
// ============================================================================

mod scenario_tests {
    use super::*;

    /// Report a lost item, claim the matching found item, approve the claim.
    #[test]
    fn test_lost_keys_reunion() {
        let mut store = SessionStore::new();

        // The owner reports their keys lost.
        let lost_id = report_item(
            &mut store,
            ItemKind::Lost,
            ReportFixtures::lost_keys(),
            date(2025, 1, 1),
        )
        .unwrap();
        assert_item_status(store.lost.get(&lost_id).unwrap(), ItemStatus::Open);

        // Someone hands in matching keys.
        let found_id = report_item(
            &mut store,
            ItemKind::Found,
            ReportFixtures::lost_keys(),
            date(2025, 1, 3),
        )
        .unwrap();

        // The owner claims the found item.
        let claim_id = submit_claim(
            &mut store,
            submission_for(found_id, ItemKind::Found),
            date(2025, 1, 4),
        )
        .unwrap();
        assert_claim_status(store.claims.get(&claim_id).unwrap(), ClaimStatus::Pending);
        assert_item_status(store.found.get(&found_id).unwrap(), ItemStatus::Claimed);

        // An administrator approves it.
        let record = approve_claim(&mut store, claim_id, date(2025, 1, 5)).unwrap();
        assert!(record.item_updated);
        assert_item_status(store.found.get(&found_id).unwrap(), ItemStatus::Returned);
        assert_claim_status(store.claims.get(&claim_id).unwrap(), ClaimStatus::Approved);

        // The lost report is resolved by hand.
        mark_returned(&mut store, ItemKind::Lost, lost_id).unwrap();
        assert_item_status(store.lost.get(&lost_id).unwrap(), ItemStatus::Returned);
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// A claim submission succeeds exactly when the target item is Open.
    #[test]
    fn prop_submission_requires_an_open_item(item in item_strategy()) {
        let mut store = SessionStore::new();
        let kind = item.kind;
        let item_id = item.id;
        let was_open = item.status == ItemStatus::Open;
        store.items_mut(kind).add(item).unwrap();

        let result = submit_claim(
            &mut store,
            submission_for(item_id, kind),
            TemporalFixtures::report_date(),
        );

        prop_assert_eq!(result.is_ok(), was_open);
        prop_assert_eq!(store.claims.len(), usize::from(was_open));
        if was_open {
            prop_assert_eq!(store.items(kind).get(&item_id).unwrap().status, ItemStatus::Claimed);
        }
    }
}
