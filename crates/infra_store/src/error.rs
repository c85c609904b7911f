//! Store error types

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in its collection
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Identifier already present in the collection
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),
}

impl StoreError {
    /// Creates a not found error for a specific entity type and identifier
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        StoreError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Creates a duplicate entry error
    pub fn duplicate(entity: &str, id: impl std::fmt::Display) -> Self {
        StoreError::DuplicateEntry(format!("{} with id '{}' already exists", entity, id))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
