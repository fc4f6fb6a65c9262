//! Record and coordinate builders shared by unit and behaviour tests.
//!
//! Every helper takes hard-coded values and panics on invalid input.

use crate::{Category, EARTH_RADIUS_KM, GeoPoint, LocationRecord};

/// Coordinates of the campus roundabout used throughout the tests.
pub const CAMPUS: (f64, f64) = (-6.9261, 107.7176);

/// Build a point from known-good coordinates.
///
/// # Panics
/// Panics when the coordinates are invalid.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures use literal coordinates")]
pub fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).expect("valid test coordinates")
}

/// Build a point `distance_km` due north of `origin`.
///
/// Moving along a meridian keeps the haversine distance exact, so tests can
/// place records at precise ranges.
///
/// # Panics
/// Panics when the result would pass the North Pole.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "arc length to degrees")]
pub fn north_of(origin: GeoPoint, distance_km: f64) -> GeoPoint {
    let delta = (distance_km / EARTH_RADIUS_KM).to_degrees();
    point(origin.lat() + delta, origin.lng())
}

/// Build an education record with empty zone and notes, open every day.
///
/// # Panics
/// Panics when the name is blank, `hours` is empty or out of range, or the
/// coordinates are invalid.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures use literal records")]
pub fn record(name: &str, lat: f64, lng: f64, hours: &[u8]) -> LocationRecord {
    LocationRecord::new(name, Category::Education, point(lat, lng), hours.iter().copied())
        .expect("valid test record")
}

/// Build a record at an arbitrary point.
///
/// # Panics
/// Panics when the name is blank or `hours` is empty or out of range.
#[must_use]
pub fn record_at(name: &str, location: GeoPoint, hours: &[u8]) -> LocationRecord {
    record(name, location.lat(), location.lng(), hours)
}

/// The campus roundabout: busy at 06:00, 07:00, 16:00 and 17:00 every day.
#[must_use]
pub fn campus_roundabout() -> LocationRecord {
    record("Campus Roundabout", CAMPUS.0, CAMPUS.1, &[6, 7, 16, 17])
        .with_zone("Jatinangor")
        .with_notes("Students heading to and from lectures.")
}

/// `count` records strung out northwards from `origin`, `spacing_km` apart,
/// starting one spacing away. Names are `Spot 00`, `Spot 01`, and so on.
///
/// # Panics
/// Panics when a generated point would pass the North Pole.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "evenly spaced offsets")]
pub fn northward_chain(
    origin: GeoPoint,
    count: u32,
    spacing_km: f64,
    hours: &[u8],
) -> Vec<LocationRecord> {
    (0..count)
        .map(|step| {
            let distance = f64::from(step + 1) * spacing_km;
            record_at(&format!("Spot {step:02}"), north_of(origin, distance), hours)
        })
        .collect()
}
