//! Claims Domain
//!
//! This crate implements ownership claims against lost and found items,
//! from submission through administrative adjudication.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Approved (item marked Returned)
//! Pending -> Rejected (item reopened)
//! ```
//!
//! A claim holds a reference to its target item by identifier and
//! collection tag; the item record itself lives in the item registry and
//! may change independently after the claim is created.

pub mod claim;
pub mod adjudication;
pub mod handoff;
pub mod error;

pub use claim::{Claim, ClaimStatus, SubmitClaim};
pub use adjudication::{AdjudicationDecision, AdjudicationRecord};
pub use handoff::{ClaimHandoff, ClaimTarget};
pub use error::ClaimError;
