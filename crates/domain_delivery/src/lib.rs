//! Delivery Domain
//!
//! Drivers submit one daily report ("nippo") per working day. This crate
//! holds the read models for drivers, reports and vehicles, the role
//! predicates that gate access to them, the tenant branding map, and the
//! port traits the HTTP layer queries through.
//!
//! # Examples
//!
//! ```rust
//! use domain_delivery::{Driver, DailyReport, ReportLimit, ReportQuery};
//! use chrono::NaiveDate;
//!
//! let driver = Driver::new("Sato Taro", "T01", "0042");
//! let report = DailyReport::new(driver.id, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
//!     .with_field("distance_km", 182);
//!
//! let query = ReportQuery::for_driver(driver.id, ReportLimit::default());
//! assert_eq!(query.apply(vec![report]).len(), 1);
//! ```

pub mod driver;
pub mod report;
pub mod vehicle;
pub mod roles;
pub mod tenant;
pub mod summary;
pub mod error;
pub mod ports;

pub use driver::{Driver, DriverProfile};
pub use report::{DailyReport, ReportLimit, ReportQuery};
pub use vehicle::Vehicle;
pub use roles::{Role, is_admin, is_driver, require_role};
pub use tenant::Branding;
pub use summary::{SubmissionSummary, OfficeSubmission};
pub use error::DeliveryError;
pub use ports::{DriverPort, ReportPort, VehiclePort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockDeliveryStore;
