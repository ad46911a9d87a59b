//! Daily reports ("nippo")
//!
//! A daily report is one driver's record for one calendar date. Apart from
//! the keys below its content is free-form and passed through untouched.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use core_kernel::{DriverId, ReportId};

use crate::error::DeliveryError;

/// A driver-submitted record for a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub id: ReportId,
    pub driver_id: DriverId,
    pub report_date: NaiveDate,
    /// Arbitrary report fields, flattened into the serialized row
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyReport {
    /// Creates an empty report for a driver and date
    pub fn new(driver_id: DriverId, report_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ReportId::new_v7(),
            driver_id,
            report_date,
            fields: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a free-form field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Maximum number of reports returned for a given request
///
/// Defaults to 30 and never exceeds 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReportLimit(u32);

impl ReportLimit {
    pub const DEFAULT: ReportLimit = ReportLimit(30);
    pub const MAX: u32 = 100;

    /// Creates a limit, rejecting anything outside `1..=MAX`
    pub fn new(limit: i64) -> Result<Self, DeliveryError> {
        match u32::try_from(limit) {
            Ok(n) if (1..=Self::MAX).contains(&n) => Ok(Self(n)),
            _ => Err(DeliveryError::InvalidLimit {
                requested: limit,
                max: Self::MAX,
            }),
        }
    }

    /// Resolves an optional query parameter, falling back to the default
    pub fn from_param(limit: Option<i64>) -> Result<Self, DeliveryError> {
        limit.map_or(Ok(Self::DEFAULT), Self::new)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for ReportLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Filter, sort and limit for a report read
///
/// Results are always ordered newest report date first, ties broken by
/// newest `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    /// Restrict to one driver's reports
    pub driver_id: Option<DriverId>,
    /// Restrict to one report date
    pub report_date: Option<NaiveDate>,
    /// Row limit; `None` returns every match
    pub limit: Option<ReportLimit>,
}

impl ReportQuery {
    /// One driver's most recent reports
    pub fn for_driver(driver_id: DriverId, limit: ReportLimit) -> Self {
        Self {
            driver_id: Some(driver_id),
            report_date: None,
            limit: Some(limit),
        }
    }

    /// Every report filed for a date
    pub fn on_date(report_date: NaiveDate) -> Self {
        Self {
            driver_id: None,
            report_date: Some(report_date),
            limit: None,
        }
    }

    /// Checks whether a report passes the filters
    pub fn matches(&self, report: &DailyReport) -> bool {
        self.driver_id.map_or(true, |id| report.driver_id == id)
            && self.report_date.map_or(true, |date| report.report_date == date)
    }

    /// Applies filter, ordering and limit to an in-memory set
    pub fn apply<I>(&self, reports: I) -> Vec<DailyReport>
    where
        I: IntoIterator<Item = DailyReport>,
    {
        let mut matched: Vec<_> = reports.into_iter().filter(|r| self.matches(r)).collect();
        sort_newest_first(&mut matched);
        if let Some(limit) = self.limit {
            matched.truncate(limit.get() as usize);
        }
        matched
    }
}

/// Orders reports by report date, then creation time, both descending
pub fn sort_newest_first(reports: &mut [DailyReport]) {
    reports.sort_by(|a, b| {
        b.report_date
            .cmp(&a.report_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
