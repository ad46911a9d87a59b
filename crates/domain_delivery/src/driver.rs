//! Drivers and their profile subset

use serde::{Deserialize, Serialize};

use core_kernel::DriverId;

use crate::roles::{self, Role};

/// A driver row as stored in the data store
///
/// `role` is kept as the raw string so authorization stays a plain
/// comparison against what the store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub office_code: String,
    pub driver_code: String,
    pub role: String,
}

impl Driver {
    /// Creates a driver with the `DRIVER` role
    pub fn new(
        name: impl Into<String>,
        office_code: impl Into<String>,
        driver_code: impl Into<String>,
    ) -> Self {
        Self {
            id: DriverId::new_v7(),
            name: name.into(),
            office_code: office_code.into(),
            driver_code: driver_code.into(),
            role: Role::Driver.as_str().to_string(),
        }
    }

    /// Replaces the role field
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role.as_str().to_string();
        self
    }

    pub fn is_driver(&self) -> bool {
        roles::is_driver(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        roles::is_admin(&self.role)
    }

    /// The fields a driver may see about themselves
    pub fn profile(&self) -> DriverProfile {
        DriverProfile::from(self)
    }
}

/// Profile subset returned to the authenticated driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub id: DriverId,
    pub name: String,
    pub office_code: String,
    pub driver_code: String,
}

impl From<&Driver> for DriverProfile {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name.clone(),
            office_code: driver.office_code.clone(),
            driver_code: driver.driver_code.clone(),
        }
    }
}

/// Sorts drivers by office code, then driver code
pub fn sort_by_codes(drivers: &mut [Driver]) {
    drivers.sort_by(|a, b| {
        a.office_code
            .cmp(&b.office_code)
            .then_with(|| a.driver_code.cmp(&b.driver_code))
    });
}
