//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! nippo test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built drivers, vehicles and report weeks
//! - `builders`: Builder patterns for test data construction
//! - `database`: PostgreSQL container harness and seeding helpers
//! - `assertions`: Ordering assertions for query results
//! - `generators`: Fake data and property-based strategies

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
