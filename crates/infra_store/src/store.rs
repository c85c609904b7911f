//! Session store

use core_kernel::ItemKind;
use domain_claims::ClaimHandoff;

use crate::repositories::{ClaimRepository, ItemRepository};

/// The process-wide record store for one running session
///
/// Owns the three record collections and the search-to-claim handoff
/// slot. Created at session start, discarded at session end; nothing is
/// persisted. The store is passed by reference to every operation instead
/// of living in ambient global state.
#[derive(Debug, Default)]
pub struct SessionStore {
    pub lost: ItemRepository,
    pub found: ItemRepository,
    pub claims: ClaimRepository,
    pub handoff: ClaimHandoff,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The item collection for the given kind
    pub fn items(&self, kind: ItemKind) -> &ItemRepository {
        match kind {
            ItemKind::Lost => &self.lost,
            ItemKind::Found => &self.found,
        }
    }

    /// Mutable access to the item collection for the given kind
    pub fn items_mut(&mut self, kind: ItemKind) -> &mut ItemRepository {
        match kind {
            ItemKind::Lost => &mut self.lost,
            ItemKind::Found => &mut self.found,
        }
    }
}
