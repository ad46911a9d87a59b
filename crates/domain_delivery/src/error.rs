//! Delivery domain errors

use thiserror::Error;

use crate::roles::Role;

/// Errors that can occur in the delivery domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// The caller's role does not grant access
    #[error("Role {actual} may not access a {required} resource")]
    Forbidden {
        required: Role,
        actual: String,
    },

    /// Role string is not one of the known roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Requested report limit is out of range
    #[error("Report limit must be between 1 and {max}, got {requested}")]
    InvalidLimit {
        requested: i64,
        max: u32,
    },
}

impl DeliveryError {
    /// Creates a Forbidden error for the given role mismatch
    pub fn forbidden(required: Role, actual: impl Into<String>) -> Self {
        DeliveryError::Forbidden {
            required,
            actual: actual.into(),
        }
    }

    /// Checks if this error is an authorization failure
    pub fn is_forbidden(&self) -> bool {
        matches!(self, DeliveryError::Forbidden { .. })
    }
}
