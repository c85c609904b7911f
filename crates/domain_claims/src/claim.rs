//! Claim aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::{ClaimId, ItemId, ItemKind};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting administrative adjudication
    Pending,
    /// Approved; the item was handed over
    Approved,
    /// Rejected; the item went back on the registry
    Rejected,
}

impl ClaimStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated claim submission
///
/// Names the target item by identifier and collection. All fields are
/// mandatory; a submission failing validation never creates a claim.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitClaim {
    /// Identifier of the item being claimed
    pub item_id: ItemId,
    /// Which collection the target item lives in
    pub item_kind: ItemKind,
    #[validate(length(min = 1, message = "claimant name is required"))]
    pub claimant: String,
    #[validate(length(min = 1, message = "contact information is required"))]
    pub contact: String,
    #[validate(length(min = 1, message = "proof of ownership is required"))]
    pub proof: String,
}

/// A claim asserting ownership of a found item or finder-identity for a
/// lost one, pending administrative adjudication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// The claimed item; the record may change or vanish after creation
    pub item_id: ItemId,
    /// Collection tag resolving which registry holds the item
    pub item_kind: ItemKind,
    pub claimant: String,
    pub contact: String,
    /// Free-text justification offered by the claimant
    pub proof: String,
    pub claimed_on: NaiveDate,
    pub status: ClaimStatus,
}

impl Claim {
    /// Creates a new Pending claim from a validated submission
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Validation` when a mandatory field is empty.
    pub fn submit(submission: SubmitClaim, claimed_on: NaiveDate) -> Result<Self, ClaimError> {
        submission
            .validate()
            .map_err(|e| ClaimError::Validation(e.to_string()))?;

        Ok(Self {
            id: ClaimId::new_v7(),
            item_id: submission.item_id,
            item_kind: submission.item_kind,
            claimant: submission.claimant,
            contact: submission.contact,
            proof: submission.proof,
            claimed_on,
            status: ClaimStatus::Pending,
        })
    }

    /// Whether the claim still awaits adjudication
    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// Marks the claim approved
    pub fn approve(&mut self) -> Result<(), ClaimError> {
        self.update_status(ClaimStatus::Approved)
    }

    /// Marks the claim rejected
    pub fn reject(&mut self) -> Result<(), ClaimError> {
        self.update_status(ClaimStatus::Rejected)
    }

    fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: status.to_string(),
            });
        }
        self.status = status;
        Ok(())
    }

    /// Checks if transition is valid; adjudication is final
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!((self.status, target), (Pending, Approved) | (Pending, Rejected))
    }
}
