//! Repository implementations for domain entities
//!
//! Each repository is an insertion-ordered collection keyed by identifier.
//! Insertion order is load-bearing: the filter and search views promise to
//! preserve it, so lookups are linear scans over a `Vec` rather than a
//! hash map.

pub mod items;
pub mod claims;

pub use items::ItemRepository;
pub use claims::ClaimRepository;
