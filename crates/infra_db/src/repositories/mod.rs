//! Repository implementations for the delivery read models
//!
//! Each repository wraps the pool and owns the SQL for one table. Every
//! public method issues a single query; filters, ordering and limits live in
//! SQL so the database does the work.

pub mod driver;
pub mod report;
pub mod vehicle;

pub use driver::{DriverRepository, DriverRow};
pub use report::{ReportRepository, ReportRow};
pub use vehicle::{VehicleRepository, VehicleRow};
