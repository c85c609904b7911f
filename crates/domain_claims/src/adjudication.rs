//! Claim adjudication records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;

/// Adjudication decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjudicationDecision {
    Approved,
    Rejected,
}

/// Result of adjudicating a claim
///
/// `item_updated` records whether the item-side status change was applied.
/// It is false when the referenced item no longer exists or its current
/// state does not admit the transition; the claim decision stands either
/// way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjudicationRecord {
    pub claim_id: ClaimId,
    pub decision: AdjudicationDecision,
    pub decided_on: NaiveDate,
    pub item_updated: bool,
}

impl AdjudicationRecord {
    /// Creates an approval record
    pub fn approved(claim_id: ClaimId, decided_on: NaiveDate, item_updated: bool) -> Self {
        Self {
            claim_id,
            decision: AdjudicationDecision::Approved,
            decided_on,
            item_updated,
        }
    }

    /// Creates a rejection record
    pub fn rejected(claim_id: ClaimId, decided_on: NaiveDate, item_updated: bool) -> Self {
        Self {
            claim_id,
            decision: AdjudicationDecision::Rejected,
            decided_on,
            item_updated,
        }
    }
}
