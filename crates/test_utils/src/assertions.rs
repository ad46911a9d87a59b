//! Custom Test Assertions
//!
//! Ordering checks for query results, with messages that name the first
//! offending pair.

use domain_delivery::{DailyReport, Driver, Vehicle};

/// Asserts reports are ordered newest report date first
///
/// # Panics
///
/// Panics at the first pair where a later report date follows an earlier one
pub fn assert_newest_first(reports: &[DailyReport]) {
    for (i, pair) in reports.windows(2).enumerate() {
        assert!(
            pair[0].report_date >= pair[1].report_date,
            "Reports out of order at {}: {} before {}",
            i,
            pair[0].report_date,
            pair[1].report_date
        );
    }
}

/// Asserts vehicles are ordered by manufacturer, then brand
pub fn assert_catalog_order(vehicles: &[Vehicle]) {
    for (i, pair) in vehicles.windows(2).enumerate() {
        let left = (&pair[0].manufacturer, &pair[0].brand);
        let right = (&pair[1].manufacturer, &pair[1].brand);
        assert!(
            left <= right,
            "Vehicles out of order at {}: {:?} before {:?}",
            i,
            left,
            right
        );
    }
}

/// Asserts drivers are ordered by office code, then driver code
pub fn assert_roster_order(drivers: &[Driver]) {
    for (i, pair) in drivers.windows(2).enumerate() {
        let left = (&pair[0].office_code, &pair[0].driver_code);
        let right = (&pair[1].office_code, &pair[1].driver_code);
        assert!(
            left <= right,
            "Drivers out of order at {}: {:?} before {:?}",
            i,
            left,
            right
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{DateFixtures, VehicleFixtures};
    use core_kernel::DriverId;

    #[test]
    fn test_sorted_reports_pass() {
        let driver = DriverId::new();
        let reports = vec![
            DailyReport::new(driver, DateFixtures::monday()),
            DailyReport::new(driver, DateFixtures::sunday_before()),
        ];
        assert_newest_first(&reports);
    }

    #[test]
    #[should_panic(expected = "Reports out of order")]
    fn test_unsorted_reports_panic() {
        let driver = DriverId::new();
        let reports = vec![
            DailyReport::new(driver, DateFixtures::sunday_before()),
            DailyReport::new(driver, DateFixtures::monday()),
        ];
        assert_newest_first(&reports);
    }

    #[test]
    #[should_panic(expected = "Vehicles out of order")]
    fn test_unsorted_vehicles_panic() {
        assert_catalog_order(&VehicleFixtures::fleet());
    }
}
