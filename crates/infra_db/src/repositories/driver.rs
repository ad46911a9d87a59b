//! Driver repository implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for reading driver rows
#[derive(Debug, Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    /// Creates a new DriverRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a driver by identifier
    ///
    /// # Returns
    ///
    /// `None` when no row matches
    pub async fn find_by_id(&self, driver_id: Uuid) -> Result<Option<DriverRow>, DatabaseError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, name, office_code, driver_code, role
            FROM driver
            WHERE id = $1
            "#,
        )
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists every driver ordered by office code, then driver code
    pub async fn list(&self) -> Result<Vec<DriverRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, name, office_code, driver_code, role
            FROM driver
            ORDER BY office_code ASC, driver_code ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Database row for a driver
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DriverRow {
    pub id: Uuid,
    pub name: String,
    pub office_code: String,
    pub driver_code: String,
    pub role: String,
}
