//! Test Data Builders
//!
//! Builders that let a test specify only the fields it cares about.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use core_kernel::{DriverId, ReportId};
use domain_delivery::DailyReport;
use serde_json::{Map, Value};

use crate::fixtures::DateFixtures;

/// Builder for constructing daily reports
pub struct TestReportBuilder {
    id: ReportId,
    driver_id: DriverId,
    report_date: NaiveDate,
    fields: Map<String, Value>,
    created_at: DateTime<Utc>,
}

impl TestReportBuilder {
    /// Creates a builder for the given driver on the fixture Monday
    pub fn new(driver_id: DriverId) -> Self {
        Self {
            id: ReportId::new(),
            driver_id,
            report_date: DateFixtures::monday(),
            fields: Map::new(),
            created_at: Utc::now(),
        }
    }

    pub fn on(mut self, report_date: NaiveDate) -> Self {
        self.report_date = report_date;
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Shifts the creation time back by `minutes`
    pub fn created_minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = Utc::now() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> DailyReport {
        DailyReport {
            id: self.id,
            driver_id: self.driver_id,
            report_date: self.report_date,
            fields: self.fields,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
