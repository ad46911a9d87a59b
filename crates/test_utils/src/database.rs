//! Database Test Utilities
//!
//! Starts a throwaway PostgreSQL container with the reference schema and
//! offers seeding helpers. The service itself never writes, so inserts live
//! here rather than in the repositories.
//!
//! Tests using this module need a running Docker daemon.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::core::IntoContainerPort;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;

use domain_delivery::{DailyReport, Driver, Vehicle};

const POSTGRES_USER: &str = "test_user";
const POSTGRES_PASSWORD: &str = "test_password";
const POSTGRES_DB: &str = "nippo_test";

const SCHEMA: &str = include_str!("../../../migrations/20240101000001_initial_schema.sql");

pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Configuration for test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
}

impl Default for TestDatabaseConfig {
    fn default() -> Self {
        Self {
            user: POSTGRES_USER.to_string(),
            password: POSTGRES_PASSWORD.to_string(),
            database: POSTGRES_DB.to_string(),
            host: "localhost".to_string(),
            port: 5432,
        }
    }
}

impl TestDatabaseConfig {
    /// Creates the database connection URL
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

/// A wrapper around a PostgreSQL test container
pub struct TestDatabase {
    _container: ContainerAsync<Postgres>,
    pub config: TestDatabaseConfig,
    pub pool: PgPool,
}

impl TestDatabase {
    /// Starts a new PostgreSQL container and applies the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or schema fails to initialize
    pub async fn new() -> TestResult<Self> {
        let container = Postgres::default()
            .with_user(POSTGRES_USER)
            .with_password(POSTGRES_PASSWORD)
            .with_db_name(POSTGRES_DB)
            .start()
            .await?;

        let config = TestDatabaseConfig {
            host: container.get_host().await?.to_string(),
            port: container.get_host_port_ipv4(5432.tcp()).await?,
            ..TestDatabaseConfig::default()
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&config.connection_url())
            .await?;

        sqlx::raw_sql(SCHEMA).execute(&pool).await?;

        Ok(Self {
            _container: container,
            config,
            pool,
        })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn insert_driver(&self, driver: &Driver) -> TestResult<()> {
        sqlx::query(
            "INSERT INTO driver (id, name, office_code, driver_code, role) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(*driver.id.as_uuid())
        .bind(&driver.name)
        .bind(&driver.office_code)
        .bind(&driver.driver_code)
        .bind(&driver.role)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_report(&self, report: &DailyReport) -> TestResult<()> {
        sqlx::query(
            r#"
            INSERT INTO daily_report (id, driver_id, report_date, fields, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*report.id.as_uuid())
        .bind(*report.driver_id.as_uuid())
        .bind(report.report_date)
        .bind(serde_json::Value::Object(report.fields.clone()))
        .bind(report.created_at)
        .bind(report.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_vehicle(&self, vehicle: &Vehicle) -> TestResult<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicle (id, plate_region, plate_class, plate_kana, plate_number,
                                 manufacturer, brand, mileage)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(*vehicle.id.as_uuid())
        .bind(&vehicle.plate_region)
        .bind(&vehicle.plate_class)
        .bind(&vehicle.plate_kana)
        .bind(&vehicle.plate_number)
        .bind(&vehicle.manufacturer)
        .bind(&vehicle.brand)
        .bind(vehicle.mileage)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
