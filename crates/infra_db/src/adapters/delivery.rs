//! PostgreSQL Delivery Adapter
//!
//! Implements the `DriverPort`, `ReportPort` and `VehiclePort` traits on top
//! of the repositories, converting row types into domain models and
//! database errors into port errors.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use core_kernel::{
    AdapterHealth, DomainPort, DriverId, HealthCheckResult, HealthCheckable, PortError, ReportId,
    VehicleId,
};
use domain_delivery::{
    DailyReport, Driver, DriverPort, ReportPort, ReportQuery, Vehicle, VehiclePort,
};

use crate::repositories::{
    DriverRepository, DriverRow, ReportRepository, ReportRow, VehicleRepository, VehicleRow,
};

const ADAPTER_ID: &str = "postgres-delivery-adapter";

/// PostgreSQL-backed implementation of the delivery ports
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - missing rows on single lookups -> `PortError::NotFound`
/// - connection and pool errors -> `PortError::Connection`
/// - other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PostgresDeliveryAdapter {
    drivers: DriverRepository,
    reports: ReportRepository,
    vehicles: VehicleRepository,
    pool: PgPool,
}

impl PostgresDeliveryAdapter {
    /// Creates a new adapter sharing one pool across repositories
    pub fn new(pool: PgPool) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            reports: ReportRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresDeliveryAdapter {}

#[async_trait]
impl HealthCheckable for PostgresDeliveryAdapter {
    /// Performs a `SELECT 1` to verify the pool is operational
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e)))
            }
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl DriverPort for PostgresDeliveryAdapter {
    #[instrument(skip(self), fields(driver_id = %id))]
    async fn get_driver(&self, id: DriverId) -> Result<Driver, PortError> {
        let row = self.drivers.find_by_id(*id.as_uuid()).await?;
        row.map(row_to_driver)
            .ok_or_else(|| PortError::not_found("Driver", id))
    }

    #[instrument(skip(self))]
    async fn list_drivers(&self) -> Result<Vec<Driver>, PortError> {
        let rows = self.drivers.list().await?;
        debug!(count = rows.len(), "Loaded drivers");
        Ok(rows.into_iter().map(row_to_driver).collect())
    }
}

#[async_trait]
impl ReportPort for PostgresDeliveryAdapter {
    #[instrument(skip(self))]
    async fn find_reports(&self, query: ReportQuery) -> Result<Vec<DailyReport>, PortError> {
        let rows = self
            .reports
            .find(
                query.driver_id.map(Into::into),
                query.report_date,
                query.limit.map(|l| i64::from(l.get())),
            )
            .await?;
        debug!(count = rows.len(), "Loaded daily reports");
        Ok(rows.into_iter().map(row_to_report).collect())
    }
}

#[async_trait]
impl VehiclePort for PostgresDeliveryAdapter {
    #[instrument(skip(self))]
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, PortError> {
        let rows = self.vehicles.list().await?;
        debug!(count = rows.len(), "Loaded vehicles");
        Ok(rows.into_iter().map(row_to_vehicle).collect())
    }
}

fn row_to_driver(row: DriverRow) -> Driver {
    Driver {
        id: DriverId::from_uuid(row.id),
        name: row.name,
        office_code: row.office_code,
        driver_code: row.driver_code,
        role: row.role,
    }
}

fn row_to_report(row: ReportRow) -> DailyReport {
    DailyReport {
        id: ReportId::from_uuid(row.id),
        driver_id: DriverId::from_uuid(row.driver_id),
        report_date: row.report_date,
        fields: into_field_map(row.fields),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn row_to_vehicle(row: VehicleRow) -> Vehicle {
    Vehicle {
        id: VehicleId::from_uuid(row.id),
        plate_region: row.plate_region,
        plate_class: row.plate_class,
        plate_kana: row.plate_kana,
        plate_number: row.plate_number,
        manufacturer: row.manufacturer,
        brand: row.brand,
        mileage: row.mileage,
    }
}

/// Report fields are expected to be a JSON object; anything else is kept
/// under a single `value` key rather than dropped.
fn into_field_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}
