//! Domain Adapters
//!
//! Adapter implementations connecting the delivery ports to PostgreSQL.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresDeliveryAdapter;
//! use domain_delivery::DriverPort;
//!
//! let adapter = PostgresDeliveryAdapter::new(pool);
//! let driver = adapter.get_driver(driver_id).await?;
//! ```

pub mod delivery;

pub use delivery::PostgresDeliveryAdapter;
