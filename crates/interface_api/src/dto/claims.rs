//! Claims DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_claims::{AdjudicationRecord, Claim, ClaimTarget, SubmitClaim};

use crate::error::ApiError;
use crate::handlers::{parse_item_id, parse_kind};

#[derive(Debug, Deserialize)]
pub struct SubmitClaimRequest {
    /// Reference id of the claimed item
    pub item_id: String,
    /// Which collection the item lives in: "lost" or "found"
    pub item_kind: String,
    pub claimant: String,
    pub contact: String,
    pub proof: String,
}

impl SubmitClaimRequest {
    pub fn into_submission(self) -> Result<SubmitClaim, ApiError> {
        Ok(SubmitClaim {
            item_id: parse_item_id(&self.item_id)?,
            item_kind: parse_kind(&self.item_kind)?,
            claimant: self.claimant,
            contact: self.contact,
            proof: self.proof,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimCreatedResponse {
    /// Claim reference id handed back to the claimant
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    pub item_id: String,
    pub item_kind: String,
    pub claimant: String,
    pub contact: String,
    pub proof: String,
    pub claimed_on: NaiveDate,
    pub status: String,
}

impl From<&Claim> for ClaimResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            item_id: claim.item_id.to_string(),
            item_kind: claim.item_kind.to_string(),
            claimant: claim.claimant.clone(),
            contact: claim.contact.clone(),
            proof: claim.proof.clone(),
            claimed_on: claim.claimed_on,
            status: claim.status.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HandoffRequest {
    pub item_id: String,
    pub item_kind: String,
}

impl HandoffRequest {
    pub fn into_target(self) -> Result<ClaimTarget, ApiError> {
        Ok(ClaimTarget {
            item_id: parse_item_id(&self.item_id)?,
            item_kind: parse_kind(&self.item_kind)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HandoffResponse {
    pub item_id: String,
    pub item_kind: String,
}

impl From<ClaimTarget> for HandoffResponse {
    fn from(target: ClaimTarget) -> Self {
        Self {
            item_id: target.item_id.to_string(),
            item_kind: target.item_kind.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdjudicationResponse {
    pub claim_id: String,
    pub decision: String,
    pub decided_on: NaiveDate,
    /// False when the referenced item was gone or could not transition
    pub item_updated: bool,
}

impl From<AdjudicationRecord> for AdjudicationResponse {
    fn from(record: AdjudicationRecord) -> Self {
        Self {
            claim_id: record.claim_id.to_string(),
            decision: format!("{:?}", record.decision),
            decided_on: record.decided_on,
            item_updated: record.item_updated,
        }
    }
}
