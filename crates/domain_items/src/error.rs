//! Item domain errors

use thiserror::Error;

use crate::image::ImageError;

/// Errors that can occur in the item domain
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}
