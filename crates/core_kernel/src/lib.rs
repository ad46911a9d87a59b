//! Core Kernel - Foundational types shared by every nippo crate
//!
//! This crate provides the building blocks used across the workspace:
//! - Strongly-typed identifiers for drivers, reports and vehicles
//! - Timezone-aware date handling and display formatting
//! - Port error and health-check types for the ports-and-adapters layout

pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use temporal::{Timezone, TemporalError};
pub use identifiers::{DriverId, ReportId, VehicleId};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
