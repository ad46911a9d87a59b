//! Daily submission summary for administrators
//!
//! Aggregates one date's reports against the driver roster: who filed, who
//! did not, and per-office totals. Only rows whose role is `DRIVER` count
//! towards the roster.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::temporal::format_date_ja;
use core_kernel::DriverId;

use crate::driver::{self, Driver, DriverProfile};
use crate::report::DailyReport;

/// Submission counts for one office
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeSubmission {
    pub office_code: String,
    pub drivers: usize,
    pub submitted: usize,
}

/// Who filed a report on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub date: NaiveDate,
    pub date_label: String,
    pub total_drivers: usize,
    pub submitted: usize,
    pub missing: Vec<DriverProfile>,
    pub offices: Vec<OfficeSubmission>,
}

impl SubmissionSummary {
    /// Builds the summary for `date`
    ///
    /// Reports for other dates or for drivers outside the roster are ignored.
    pub fn build(date: NaiveDate, drivers: &[Driver], reports: &[DailyReport]) -> Self {
        let filed: HashSet<DriverId> = reports
            .iter()
            .filter(|r| r.report_date == date)
            .map(|r| r.driver_id)
            .collect();

        let mut roster: Vec<Driver> = drivers.iter().filter(|d| d.is_driver()).cloned().collect();
        driver::sort_by_codes(&mut roster);

        let mut offices: BTreeMap<String, OfficeSubmission> = BTreeMap::new();
        let mut missing = Vec::new();

        for d in &roster {
            let has_filed = filed.contains(&d.id);
            let office = offices
                .entry(d.office_code.clone())
                .or_insert_with(|| OfficeSubmission {
                    office_code: d.office_code.clone(),
                    drivers: 0,
                    submitted: 0,
                });
            office.drivers += 1;
            if has_filed {
                office.submitted += 1;
            } else {
                missing.push(d.profile());
            }
        }

        Self {
            date,
            date_label: format_date_ja(date),
            total_drivers: roster.len(),
            submitted: roster.len() - missing.len(),
            missing,
            offices: offices.into_values().collect(),
        }
    }

    /// Share of drivers who filed, 0.0 when the roster is empty
    pub fn submission_rate(&self) -> f64 {
        if self.total_drivers == 0 {
            0.0
        } else {
            self.submitted as f64 / self.total_drivers as f64
        }
    }
}
