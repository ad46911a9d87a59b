//! Random Test Data
//!
//! `fake`-backed generators for realistic rows, and proptest strategies for
//! the values handlers accept.

use chrono::{Days, NaiveDate};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;

use core_kernel::{DriverId, VehicleId};
use domain_delivery::{DailyReport, Driver, Vehicle};

const KANA: &[&str] = &["あ", "い", "う", "え", "か", "き", "く", "さ"];
const REGIONS: &[&str] = &["品川", "練馬", "横浜", "川崎", "多摩"];

/// A driver with a random name and codes
pub fn fake_driver() -> Driver {
    let office: u8 = (1u8..10).fake();
    let code: u16 = (1u16..10_000).fake();
    Driver::new(
        Name().fake::<String>(),
        format!("T{:02}", office),
        format!("{:04}", code),
    )
}

/// A vehicle with random plate and maker
pub fn fake_vehicle() -> Vehicle {
    let region = REGIONS[(0..REGIONS.len()).fake::<usize>()];
    let kana = KANA[(0..KANA.len()).fake::<usize>()];
    let serial: u16 = (1u16..10_000).fake();
    Vehicle {
        id: VehicleId::new(),
        plate_region: region.to_string(),
        plate_class: format!("{}", (100u16..900).fake::<u16>()),
        plate_kana: kana.to_string(),
        plate_number: format!("{:02}-{:02}", serial / 100, serial % 100),
        manufacturer: CompanyName().fake::<String>(),
        brand: Name().fake::<String>(),
        mileage: Some((0..500_000i64).fake::<i64>()),
    }
}

/// A report with random route metrics
pub fn fake_report(driver_id: DriverId, report_date: NaiveDate) -> DailyReport {
    DailyReport::new(driver_id, report_date)
        .with_field("distance_km", (20u32..400).fake::<u32>())
        .with_field("deliveries", (5u32..120).fake::<u32>())
        .with_field("fuel_l", (5u32..80).fake::<u32>())
}

/// Strategy for valid `limit` query values
pub fn report_limit_strategy() -> impl Strategy<Value = u32> {
    1u32..=100u32
}

/// Strategy for report dates within 2024
pub fn report_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..366).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_driver_codes() {
        let driver = fake_driver();
        assert_eq!(driver.office_code.len(), 3);
        assert_eq!(driver.driver_code.len(), 4);
        assert!(driver.is_driver());
    }

    #[test]
    fn test_fake_vehicle_plate() {
        let vehicle = fake_vehicle();
        assert!(REGIONS.contains(&vehicle.plate_region.as_str()));
        assert_eq!(vehicle.plate_number.len(), 5);
    }

    proptest! {
        #[test]
        fn generated_dates_are_2024(date in report_date_strategy()) {
            prop_assert_eq!(chrono::Datelike::year(&date), 2024);
        }
    }
}
