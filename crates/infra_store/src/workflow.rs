//! Claim workflow over the session store
//!
//! All state changes that span the item and claim collections live here:
//! report intake, claim submission, adjudication, and the administrative
//! direct transitions. Repositories stay dumb; this module owns the rules.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use core_kernel::{ClaimId, ItemId, ItemKind};
use domain_claims::{AdjudicationRecord, Claim, ClaimError, SubmitClaim};
use domain_items::{Item, ItemError, ItemStatus, ReportItem};

use crate::error::StoreError;
use crate::store::SessionStore;

/// Errors that can occur in the claim workflow
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The claim targets an item that does not exist in the named
    /// collection or is not Open
    #[error("Item {id} not found in the {kind} collection or no longer available for claiming")]
    ItemUnavailable { id: ItemId, kind: ItemKind },

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Registers a new report, creating an Open item record
///
/// # Errors
///
/// Propagates validation failures; nothing is stored in that case.
pub fn report_item(
    store: &mut SessionStore,
    kind: ItemKind,
    report: ReportItem,
    reported_on: NaiveDate,
) -> Result<ItemId, WorkflowError> {
    let item = Item::from_report(kind, report, reported_on)?;
    let id = store.items_mut(kind).add(item)?;
    info!(%id, %kind, "item reported");
    Ok(id)
}

/// Submits a claim against an Open item
///
/// On success the item moves to Claimed and a Pending claim is stored.
/// When the target does not exist in the named collection, or exists but
/// is not Open, the submission fails and neither collection is mutated.
pub fn submit_claim(
    store: &mut SessionStore,
    submission: SubmitClaim,
    claimed_on: NaiveDate,
) -> Result<ClaimId, WorkflowError> {
    // Validation happens before any lookup so a bad form never holds an item.
    let claim = Claim::submit(submission, claimed_on)?;
    let (item_id, kind) = (claim.item_id, claim.item_kind);

    let item = store
        .items_mut(kind)
        .get_mut(&item_id)
        .filter(|item| item.is_claimable())
        .ok_or(WorkflowError::ItemUnavailable { id: item_id, kind })?;
    item.update_status(ItemStatus::Claimed)?;

    let claim_id = store.claims.add(claim)?;
    info!(%claim_id, item_id = %item_id, "claim submitted");
    Ok(claim_id)
}

/// Approves a Pending claim, marking the referenced item Returned
///
/// The claim must be Pending; otherwise nothing changes and an error is
/// returned. The item-side update is skipped — and recorded as skipped —
/// when the referenced item has been deleted since the claim was created
/// or its current state does not admit the transition.
pub fn approve_claim(
    store: &mut SessionStore,
    claim_id: ClaimId,
    decided_on: NaiveDate,
) -> Result<AdjudicationRecord, WorkflowError> {
    let claim = store
        .claims
        .get_mut(&claim_id)
        .ok_or_else(|| StoreError::not_found("Claim", claim_id))?;
    claim.approve()?;
    let (item_id, kind) = (claim.item_id, claim.item_kind);

    let item_updated = apply_item_side_effect(store, kind, item_id, ItemStatus::Returned);
    info!(%claim_id, item_updated, "claim approved");
    Ok(AdjudicationRecord::approved(claim_id, decided_on, item_updated))
}

/// Rejects a Pending claim, putting the referenced item back to Open
///
/// Same leniency as approval: a missing or otherwise-transitioned item
/// skips the item-side update without failing the rejection.
pub fn reject_claim(
    store: &mut SessionStore,
    claim_id: ClaimId,
    decided_on: NaiveDate,
) -> Result<AdjudicationRecord, WorkflowError> {
    let claim = store
        .claims
        .get_mut(&claim_id)
        .ok_or_else(|| StoreError::not_found("Claim", claim_id))?;
    claim.reject()?;
    let (item_id, kind) = (claim.item_id, claim.item_kind);

    let item_updated = apply_item_side_effect(store, kind, item_id, ItemStatus::Open);
    info!(%claim_id, item_updated, "claim rejected");
    Ok(AdjudicationRecord::rejected(claim_id, decided_on, item_updated))
}

/// Administrative "mark returned"
pub fn mark_returned(
    store: &mut SessionStore,
    kind: ItemKind,
    item_id: ItemId,
) -> Result<(), WorkflowError> {
    let item = store
        .items_mut(kind)
        .get_mut(&item_id)
        .ok_or_else(|| StoreError::not_found("Item", item_id))?;
    item.update_status(ItemStatus::Returned)?;
    info!(%item_id, %kind, "item marked returned");
    Ok(())
}

/// Administrative "mark closed"; Closed is terminal
pub fn mark_closed(
    store: &mut SessionStore,
    kind: ItemKind,
    item_id: ItemId,
) -> Result<(), WorkflowError> {
    let item = store
        .items_mut(kind)
        .get_mut(&item_id)
        .ok_or_else(|| StoreError::not_found("Item", item_id))?;
    item.update_status(ItemStatus::Closed)?;
    info!(%item_id, %kind, "item closed");
    Ok(())
}

/// Administrative item deletion
///
/// Claims referencing the deleted item are left in place with a dangling
/// reference; adjudicating them later skips the item-side effect.
pub fn delete_item(
    store: &mut SessionStore,
    kind: ItemKind,
    item_id: ItemId,
) -> Result<Item, WorkflowError> {
    let item = store
        .items_mut(kind)
        .remove(&item_id)
        .ok_or_else(|| StoreError::not_found("Item", item_id))?;
    info!(%item_id, %kind, "item deleted");
    Ok(item)
}

/// Administrative claim deletion; never touches the referenced item
pub fn delete_claim(store: &mut SessionStore, claim_id: ClaimId) -> Result<Claim, WorkflowError> {
    let claim = store
        .claims
        .remove(&claim_id)
        .ok_or_else(|| StoreError::not_found("Claim", claim_id))?;
    info!(%claim_id, "claim deleted");
    Ok(claim)
}

// Documented leniency: the claim-side decision stands even when the item
// record is gone or cannot take the transition anymore.
fn apply_item_side_effect(
    store: &mut SessionStore,
    kind: ItemKind,
    item_id: ItemId,
    target: ItemStatus,
) -> bool {
    match store.items_mut(kind).get_mut(&item_id) {
        Some(item) => match item.update_status(target) {
            Ok(()) => true,
            Err(error) => {
                warn!(%item_id, %error, "skipping item update during adjudication");
                false
            }
        },
        None => {
            warn!(%item_id, %kind, "claimed item no longer exists; skipping item update");
            false
        }
    }
}
