//! Claim repository implementation

use core_kernel::ClaimId;
use domain_claims::Claim;

use crate::error::StoreError;

/// Insertion-ordered collection of claim records
#[derive(Debug, Default)]
pub struct ClaimRepository {
    claims: Vec<Claim>,
}

impl ClaimRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a claim, rejecting duplicate identifiers
    pub fn add(&mut self, claim: Claim) -> Result<ClaimId, StoreError> {
        if self.get(&claim.id).is_some() {
            return Err(StoreError::duplicate("Claim", claim.id));
        }
        let id = claim.id;
        self.claims.push(claim);
        Ok(id)
    }

    /// Identifier-keyed lookup
    pub fn get(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.id == *id)
    }

    /// Identifier-keyed mutable lookup
    pub fn get_mut(&mut self, id: &ClaimId) -> Option<&mut Claim> {
        self.claims.iter_mut().find(|claim| claim.id == *id)
    }

    /// Removes and returns the claim with the given identifier
    ///
    /// Deleting a claim never touches the item it references.
    pub fn remove(&mut self, id: &ClaimId) -> Option<Claim> {
        let index = self.claims.iter().position(|claim| claim.id == *id)?;
        Some(self.claims.remove(index))
    }

    /// Full collection, in insertion order
    pub fn all(&self) -> &[Claim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
