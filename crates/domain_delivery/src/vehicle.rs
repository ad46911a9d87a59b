//! Vehicles available to drivers

use serde::{Deserialize, Serialize};

use core_kernel::VehicleId;

/// A vehicle row
///
/// The number plate is stored in its printed components: region, class
/// number, kana and serial (e.g. `品川 500 あ 12-34`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub plate_region: String,
    pub plate_class: String,
    pub plate_kana: String,
    pub plate_number: String,
    pub manufacturer: String,
    pub brand: String,
    /// Odometer reading in kilometres, when known
    pub mileage: Option<i64>,
}

/// Sorts vehicles by manufacturer, then brand
///
/// The id is a final tie-breaker so the order is stable across stores.
pub fn sort_by_manufacturer(vehicles: &mut [Vehicle]) {
    vehicles.sort_by(|a, b| {
        a.manufacturer
            .cmp(&b.manufacturer)
            .then_with(|| a.brand.cmp(&b.brand))
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });
}
