//! Delivery Domain Ports
//!
//! Port traits for the three read models the service exposes. Handlers only
//! ever see these traits; the PostgreSQL adapter in `infra_db` and the
//! in-memory mock below both implement them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_delivery::ports::{ReportPort, ReportQuery};
//! use std::sync::Arc;
//!
//! let reports: Arc<dyn ReportPort> = Arc::new(PostgresDeliveryAdapter::new(pool));
//! let rows = reports.find_reports(ReportQuery::for_driver(id, limit)).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, DriverId, HealthCheckable, PortError};

use crate::driver::Driver;
use crate::report::DailyReport;
use crate::vehicle::Vehicle;

pub use crate::report::ReportQuery;

/// Read access to driver rows
#[async_trait]
pub trait DriverPort: DomainPort + HealthCheckable {
    /// Retrieves a driver by ID
    ///
    /// # Returns
    ///
    /// The driver if found, or `PortError::NotFound`
    async fn get_driver(&self, id: DriverId) -> Result<Driver, PortError>;

    /// Lists every driver ordered by office code, then driver code
    async fn list_drivers(&self) -> Result<Vec<Driver>, PortError>;
}

/// Read access to daily reports
#[async_trait]
pub trait ReportPort: DomainPort + HealthCheckable {
    /// Finds reports matching the query, newest report date first
    async fn find_reports(&self, query: ReportQuery) -> Result<Vec<DailyReport>, PortError>;
}

/// Read access to the vehicle list
#[async_trait]
pub trait VehiclePort: DomainPort + HealthCheckable {
    /// Lists every vehicle ordered by manufacturer, then brand
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError>;
}

/// Mock implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;
    use core_kernel::{AdapterHealth, HealthCheckResult};

    use crate::driver;
    use crate::vehicle;

    /// In-memory store implementing every delivery port
    ///
    /// Applies the same filter, sort and limit rules as the SQL queries.
    /// Call [`MockDeliveryStore::fail_reads`] to make every read return a
    /// store error.
    #[derive(Debug, Default)]
    pub struct MockDeliveryStore {
        drivers: Arc<RwLock<HashMap<DriverId, Driver>>>,
        reports: Arc<RwLock<Vec<DailyReport>>>,
        vehicles: Arc<RwLock<Vec<Vehicle>>>,
        failing: AtomicBool,
    }

    impl MockDeliveryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn insert_driver(&self, driver: Driver) {
            self.drivers.write().await.insert(driver.id, driver);
        }

        pub async fn insert_report(&self, report: DailyReport) {
            self.reports.write().await.push(report);
        }

        pub async fn insert_vehicle(&self, vehicle: Vehicle) {
            self.vehicles.write().await.push(vehicle);
        }

        /// Makes every subsequent read fail with a store error
        pub fn fail_reads(&self) {
            self.failing.store(true, Ordering::SeqCst);
        }

        fn check_available(&self) -> Result<(), PortError> {
            if self.failing.load(Ordering::SeqCst) {
                Err(PortError::connection("mock store unavailable"))
            } else {
                Ok(())
            }
        }
    }

    impl DomainPort for MockDeliveryStore {}

    #[async_trait]
    impl HealthCheckable for MockDeliveryStore {
        async fn health_check(&self) -> HealthCheckResult {
            let status = if self.failing.load(Ordering::SeqCst) {
                AdapterHealth::Unhealthy
            } else {
                AdapterHealth::Healthy
            };
            HealthCheckResult {
                adapter_id: "mock-delivery-store".to_string(),
                status,
                latency_ms: 0,
                message: None,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl DriverPort for MockDeliveryStore {
        async fn get_driver(&self, id: DriverId) -> Result<Driver, PortError> {
            self.check_available()?;
            self.drivers
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Driver", id))
        }

        async fn list_drivers(&self) -> Result<Vec<Driver>, PortError> {
            self.check_available()?;
            let mut drivers: Vec<_> = self.drivers.read().await.values().cloned().collect();
            driver::sort_by_codes(&mut drivers);
            Ok(drivers)
        }
    }

    #[async_trait]
    impl ReportPort for MockDeliveryStore {
        async fn find_reports(&self, query: ReportQuery) -> Result<Vec<DailyReport>, PortError> {
            self.check_available()?;
            let reports = self.reports.read().await.clone();
            Ok(query.apply(reports))
        }
    }

    #[async_trait]
    impl VehiclePort for MockDeliveryStore {
        async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError> {
            self.check_available()?;
            let mut vehicles = self.vehicles.read().await.clone();
            vehicle::sort_by_manufacturer(&mut vehicles);
            Ok(vehicles)
        }
    }
}
