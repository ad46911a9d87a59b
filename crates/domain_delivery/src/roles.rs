//! Role predicates
//!
//! Authorization is a plain string comparison against the role field carried
//! by the driver row and the session token. Comparison is exact and
//! case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeliveryError;

/// Roles known to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Driver,
    Admin,
}

impl Role {
    /// Wire representation stored in the role field
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Driver => "DRIVER",
            Role::Admin => "ADMIN",
        }
    }

    /// Returns true when `role` names this role
    pub fn matches(&self, role: &str) -> bool {
        role == self.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRIVER" => Ok(Role::Driver),
            "ADMIN" => Ok(Role::Admin),
            other => Err(DeliveryError::UnknownRole(other.to_string())),
        }
    }
}

/// Checks whether the role field names a driver
pub fn is_driver(role: &str) -> bool {
    Role::Driver.matches(role)
}

/// Checks whether the role field names an administrator
pub fn is_admin(role: &str) -> bool {
    Role::Admin.matches(role)
}

/// Rejects the caller unless its role field equals `required`
pub fn require_role(role: &str, required: Role) -> Result<(), DeliveryError> {
    if required.matches(role) {
        Ok(())
    } else {
        Err(DeliveryError::forbidden(required, role))
    }
}
