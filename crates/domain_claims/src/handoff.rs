//! Search-to-claim handoff
//!
//! Selecting a result on the search view pre-fills the claim form with the
//! chosen item. The handoff is a single slot, not a queue: staging a new
//! target overwrites any previous one, and taking the target consumes and
//! clears the slot in one step.

use serde::{Deserialize, Serialize};

use core_kernel::{ItemId, ItemKind};

/// The item reference carried from search to the claim form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimTarget {
    pub item_id: ItemId,
    pub item_kind: ItemKind,
}

/// Single-slot, overwrite-on-write, read-once relay
#[derive(Debug, Default)]
pub struct ClaimHandoff {
    slot: Option<ClaimTarget>,
}

impl ClaimHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a target, replacing any previously staged one
    pub fn stage(&mut self, target: ClaimTarget) {
        if let Some(previous) = self.slot.replace(target) {
            tracing::debug!(item_id = %previous.item_id, "claim handoff overwritten");
        }
    }

    /// Consumes the staged target, leaving the slot empty
    pub fn take(&mut self) -> Option<ClaimTarget> {
        self.slot.take()
    }

    /// True if a target is currently staged
    pub fn is_staged(&self) -> bool {
        self.slot.is_some()
    }
}
