//! Request handlers for each area of the API
//!
//! Handlers parse path and query inputs, take the store lock for the
//! duration of one operation, and map domain results onto DTOs. No
//! handler holds the lock across external I/O; every operation is a
//! finite in-memory computation.

pub mod health;
pub mod items;
pub mod search;
pub mod claims;
pub mod admin;
pub mod reports;

use core_kernel::{ClaimId, ItemId, ItemKind};

use crate::error::ApiError;

/// Parses a collection kind path or query segment
pub(crate) fn parse_kind(raw: &str) -> Result<ItemKind, ApiError> {
    raw.parse().map_err(ApiError::BadRequest)
}

/// Parses an item reference id, with or without its display prefix
pub(crate) fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid item id: {raw}")))
}

/// Parses a claim reference id, with or without its display prefix
pub(crate) fn parse_claim_id(raw: &str) -> Result<ClaimId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid claim id: {raw}")))
}
