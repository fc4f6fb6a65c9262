//! Core domain types for the spot radar.
//!
//! The crate models the location knowledge base, the great-circle distance
//! helpers, and the structured results produced by the spot recommender.
//! Constructors validate their input and return `Result`, so everything
//! downstream of them can assume well-formed coordinates and hours.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod geodesy;
pub mod location;
pub mod moment;
pub mod performance;
pub mod reason;
pub mod spot;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(feature = "spatial-index")]
pub use catalog::IndexedCatalog;
pub use catalog::{Catalog, LocationStore, StoredLocation};
pub use geodesy::{
    EARTH_RADIUS_KM, GeoPoint, GeoPointError, bounding_box, haversine_km, haversine_km_raw,
};
pub use location::{Category, LocationRecord, LocationRecordError, ParseCategoryError};
pub use moment::{QueryMoment, QueryMomentError, weekday_from_index, weekday_index};
pub use performance::{PerformanceGrade, SERVICE_INTERVAL_ORDERS, VehicleHealth};
pub use reason::{HOT_NOW_MARKER, Locale, ParseLocaleError, VERY_CLOSE_MARKER, day_name, describe};
pub use spot::{
    Priority, Rationale, ScoredSpot, SpotReason, SpotSource, TIER_GAP_KM, format_distance,
};
