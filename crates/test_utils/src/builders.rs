//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about; names and contact
//! details fall back to generated values.

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::{ClaimId, ItemId, ItemKind};
use domain_claims::{Claim, ClaimStatus};
use domain_items::{Category, Item, ItemStatus};

use crate::fixtures::TemporalFixtures;

/// Builder for item records
pub struct TestItemBuilder {
    id: ItemId,
    kind: ItemKind,
    category: Category,
    name: String,
    description: String,
    location: String,
    event_date: NaiveDate,
    reported_on: NaiveDate,
    status: ItemStatus,
}

impl Default for TestItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestItemBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ItemId::new_v7(),
            kind: ItemKind::Lost,
            category: Category::Other,
            name: "Test item".to_string(),
            description: "An item used in tests".to_string(),
            location: "Somewhere".to_string(),
            event_date: TemporalFixtures::event_date(),
            reported_on: TemporalFixtures::report_date(),
            status: ItemStatus::Open,
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_event_date(mut self, date: NaiveDate) -> Self {
        self.event_date = date;
        self
    }

    pub fn with_reported_on(mut self, date: NaiveDate) -> Self {
        self.reported_on = date;
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the item record
    pub fn build(self) -> Item {
        Item {
            id: self.id,
            kind: self.kind,
            category: self.category,
            name: self.name,
            description: self.description,
            location: self.location,
            event_date: self.event_date,
            reported_on: self.reported_on,
            reporter: Name().fake(),
            contact: SafeEmail().fake(),
            status: self.status,
            image: None,
        }
    }
}

/// Builder for claim records
pub struct TestClaimBuilder {
    id: ClaimId,
    item_id: ItemId,
    item_kind: ItemKind,
    proof: String,
    claimed_on: NaiveDate,
    status: ClaimStatus,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::new_v7(),
            item_id: ItemId::new_v7(),
            item_kind: ItemKind::Found,
            proof: "Described the contents before opening it".to_string(),
            claimed_on: TemporalFixtures::report_date(),
            status: ClaimStatus::Pending,
        }
    }

    pub fn with_item(mut self, item_id: ItemId, item_kind: ItemKind) -> Self {
        self.item_id = item_id;
        self.item_kind = item_kind;
        self
    }

    pub fn with_proof(mut self, proof: impl Into<String>) -> Self {
        self.proof = proof.into();
        self
    }

    pub fn with_claimed_on(mut self, date: NaiveDate) -> Self {
        self.claimed_on = date;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the claim record
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            item_id: self.item_id,
            item_kind: self.item_kind,
            claimant: Name().fake(),
            contact: SafeEmail().fake(),
            proof: self.proof,
            claimed_on: self.claimed_on,
            status: self.status,
        }
    }
}
