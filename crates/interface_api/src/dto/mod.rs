//! Request/Response data transfer objects
//!
//! DTOs keep the wire format decoupled from the domain types: identifiers
//! travel as prefixed strings, enums as their display labels, and dates as
//! YYYY-MM-DD.

pub mod items;
pub mod claims;
pub mod reports;
