//! Vehicle repository implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for reading the vehicle list
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every vehicle ordered by manufacturer, then brand
    pub async fn list(&self) -> Result<Vec<VehicleRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, plate_region, plate_class, plate_kana, plate_number,
                   manufacturer, brand, mileage
            FROM vehicle
            ORDER BY manufacturer ASC, brand ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Database row for a vehicle
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VehicleRow {
    pub id: Uuid,
    pub plate_region: String,
    pub plate_class: String,
    pub plate_kana: String,
    pub plate_number: String,
    pub manufacturer: String,
    pub brand: String,
    pub mileage: Option<i64>,
}
