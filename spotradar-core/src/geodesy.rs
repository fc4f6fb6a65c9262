//! Validated WGS84 points and great-circle distance.
//!
//! Distances use the haversine formula on a spherical Earth of radius
//! [`EARTH_RADIUS_KM`]. The `sin²(Δ/2)` form keeps sub-metre separations
//! accurate, which matters when a driver is parked at a spot.

use geo::{Coord, Rect};
use thiserror::Error;

/// Earth radius used for every distance computation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Padding added to search rectangles so rounding never drops a boundary
/// point (roughly a tenth of a metre).
const BBOX_PADDING_DEG: f64 = 1e-6;

/// A latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use spotradar_core::GeoPoint;
///
/// # fn main() -> Result<(), spotradar_core::GeoPointError> {
/// let campus = GeoPoint::new(-6.9261, 107.7176)?;
/// assert_eq!(campus.lat(), -6.9261);
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoPoint"))]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GeoPointError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinates must be finite numbers")]
    NonFinite,
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {lat} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        lat: f64,
    },
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {lng} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        lng: f64,
    },
}

impl GeoPoint {
    /// Validate and construct a point.
    ///
    /// # Errors
    /// Returns [`GeoPointError`] for non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoPointError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoPointError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoPointError::LatitudeOutOfRange { lat });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoPointError::LongitudeOutOfRange { lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lng(self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in kilometres.
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        haversine_km(self, other)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.lng,
            y: point.lat,
        }
    }
}

impl TryFrom<Coord<f64>> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(coord.y, coord.x)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoPointError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

/// Great-circle distance between two validated points, in kilometres.
///
/// # Examples
///
/// ```
/// use spotradar_core::{GeoPoint, haversine_km};
///
/// # fn main() -> Result<(), spotradar_core::GeoPointError> {
/// let a = GeoPoint::new(-6.9261, 107.7176)?;
/// assert_eq!(haversine_km(a, a), 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_km_raw(a.lat, a.lng, b.lat, b.lng)
}

/// Great-circle distance between two raw coordinate pairs, in kilometres.
///
/// Inputs are degrees and are not validated: NaN propagates to the result.
/// Returns `0.0` when both points coincide.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km_raw(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    // Rounding can push the term fractionally past 1 for antipodal points.
    let half_chord = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let central_angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * central_angle
}

/// Smallest lon/lat rectangle containing every point within `radius_km` of
/// `centre`.
///
/// Returns `None` when no single rectangle works: the circle reaches a pole,
/// crosses the antimeridian, or the radius is negative or non-finite. Callers
/// fall back to scanning every location in that case.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "bounding coordinates are derived with spherical trigonometry"
)]
pub fn bounding_box(centre: GeoPoint, radius_km: f64) -> Option<Rect<f64>> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return None;
    }
    let angular = radius_km / EARTH_RADIUS_KM;
    let lat_delta = angular.to_degrees() + BBOX_PADDING_DEG;
    let min_lat = centre.lat - lat_delta;
    let max_lat = centre.lat + lat_delta;
    if min_lat <= -90.0 || max_lat >= 90.0 {
        return None;
    }

    let ratio = angular.sin() / centre.lat.to_radians().cos();
    if !(0.0..1.0).contains(&ratio) {
        return None;
    }
    let lng_delta = ratio.asin().to_degrees() + BBOX_PADDING_DEG;
    let min_lng = centre.lng - lng_delta;
    let max_lng = centre.lng + lng_delta;
    if min_lng < -180.0 || max_lng > 180.0 {
        return None;
    }

    Some(Rect::new(
        Coord {
            x: min_lng,
            y: min_lat,
        },
        Coord {
            x: max_lng,
            y: max_lat,
        },
    ))
}
