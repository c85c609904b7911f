//! Core Kernel - Foundational types and utilities for the lost-and-found registry
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for items and claims
//! - Calendar-date periods for report filtering
//! - Common error types

pub mod temporal;
pub mod identifiers;
pub mod error;

pub use temporal::{ReportingPeriod, TemporalError, parse_date, DATE_FORMAT};
pub use identifiers::{ItemId, ClaimId, ItemKind};
pub use error::CoreError;
