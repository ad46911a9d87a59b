//! Daily report repository implementation

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for reading daily reports
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Creates a new ReportRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds reports, newest report date first
    ///
    /// # Arguments
    ///
    /// * `driver_id` - Restrict to one driver when set
    /// * `report_date` - Restrict to one date when set
    /// * `limit` - Maximum rows; `None` returns every match
    pub async fn find(
        &self,
        driver_id: Option<Uuid>,
        report_date: Option<NaiveDate>,
        limit: Option<i64>,
    ) -> Result<Vec<ReportRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT id, driver_id, report_date, fields, created_at, updated_at
            FROM daily_report
            WHERE ($1::uuid IS NULL OR driver_id = $1)
              AND ($2::date IS NULL OR report_date = $2)
            ORDER BY report_date DESC, created_at DESC
            LIMIT $3
            "#,
        )
        .bind(driver_id)
        .bind(report_date)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Database row for a daily report
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub report_date: NaiveDate,
    pub fields: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
