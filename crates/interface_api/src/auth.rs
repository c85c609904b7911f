//! Administrative access control
//!
//! A single static shared secret gates every administrative action. There
//! are no user accounts, sessions, or roles beyond this one check; the
//! secret travels in a request header and is compared against the
//! configured value.

use thiserror::Error;

/// Header carrying the administrative secret
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Auth errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing administrative secret")]
    MissingSecret,
    #[error("Invalid administrative secret")]
    InvalidSecret,
}

/// Verifies a presented admin secret against the configured one
pub fn verify_admin_secret(presented: Option<&str>, expected: &str) -> Result<(), AuthError> {
    match presented {
        None => Err(AuthError::MissingSecret),
        Some(value) if value == expected => Ok(()),
        Some(_) => Err(AuthError::InvalidSecret),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_secret_is_accepted() {
        assert_eq!(verify_admin_secret(Some("s3cret"), "s3cret"), Ok(()));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        assert_eq!(
            verify_admin_secret(Some("guess"), "s3cret"),
            Err(AuthError::InvalidSecret)
        );
    }

    #[test]
    fn test_absent_secret_is_rejected() {
        assert_eq!(verify_admin_secret(None, "s3cret"), Err(AuthError::MissingSecret));
    }
}
