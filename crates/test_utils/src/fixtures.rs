//! Pre-built Test Fixtures
//!
//! Ready-to-use drivers, vehicles and reports. Values are fixed so tests can
//! assert on them directly.

use chrono::{Days, NaiveDate};
use core_kernel::VehicleId;
use domain_delivery::{DailyReport, Driver, Role, Vehicle};
use serde_json::json;

/// Fixture for driver rows
pub struct DriverFixtures;

impl DriverFixtures {
    /// Driver at the Tokyo office
    pub fn sato() -> Driver {
        Driver::new("佐藤 太郎", "T01", "0042")
    }

    /// Second driver at the Tokyo office
    pub fn suzuki() -> Driver {
        Driver::new("鈴木 花子", "T01", "0043")
    }

    /// Driver at the Yokohama office
    pub fn tanaka() -> Driver {
        Driver::new("田中 一郎", "Y02", "0007")
    }

    /// Operations administrator
    pub fn admin() -> Driver {
        Driver::new("高橋 管理", "HQ", "9001").with_role(Role::Admin)
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// A Monday used as the anchor for report weeks
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    /// The day before [`DateFixtures::monday`]
    pub fn sunday_before() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
    }
}

/// Fixture for daily reports
pub struct ReportFixtures;

impl ReportFixtures {
    /// One report per day for `days` consecutive days starting at `start`
    pub fn consecutive(driver: &Driver, start: NaiveDate, days: u64) -> Vec<DailyReport> {
        (0..days)
            .map(|offset| {
                DailyReport::new(driver.id, start + Days::new(offset))
                    .with_field("distance_km", 100 + offset)
                    .with_field("deliveries", json!({"completed": 40, "absent": 2}))
            })
            .collect()
    }
}

/// Fixture for vehicles
pub struct VehicleFixtures;

impl VehicleFixtures {
    fn vehicle(manufacturer: &str, brand: &str, plate_number: &str, mileage: Option<i64>) -> Vehicle {
        Vehicle {
            id: VehicleId::new(),
            plate_region: "品川".to_string(),
            plate_class: "400".to_string(),
            plate_kana: "あ".to_string(),
            plate_number: plate_number.to_string(),
            manufacturer: manufacturer.to_string(),
            brand: brand.to_string(),
            mileage,
        }
    }

    pub fn isuzu_elf() -> Vehicle {
        Self::vehicle("Isuzu", "Elf", "11-22", Some(182_340))
    }

    pub fn hino_ranger() -> Vehicle {
        Self::vehicle("Hino", "Ranger", "33-44", Some(95_010))
    }

    pub fn hino_dutro() -> Vehicle {
        Self::vehicle("Hino", "Dutro", "55-66", None)
    }

    /// A small fleet deliberately out of catalog order
    pub fn fleet() -> Vec<Vehicle> {
        vec![Self::isuzu_elf(), Self::hino_ranger(), Self::hino_dutro()]
    }
}
