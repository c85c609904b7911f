//! Infrastructure Store Layer
//!
//! This crate provides the in-memory record store for the lost-and-found
//! registry. All three collections — lost items, found items, claims — live
//! for exactly one session and are discarded when the process exits; there
//! is no persistence layer behind them.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: insertion-ordered,
//! identifier-keyed collections with append, lookup, and delete, wrapped
//! in a [`SessionStore`] that is passed explicitly to every operation.
//! Cross-collection state changes (claim submission and adjudication) go
//! through the [`workflow`] module rather than touching repositories
//! directly.

pub mod store;
pub mod error;
pub mod repositories;
pub mod workflow;

pub use store::SessionStore;
pub use error::StoreError;
pub use repositories::{ItemRepository, ClaimRepository};
pub use workflow::WorkflowError;
