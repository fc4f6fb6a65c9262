//! Facade crate for the spot radar recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the recommender
//! and the built-in knowledge base behind feature flags.

#![forbid(unsafe_code)]

pub use spotradar_core::{
    Catalog, Category, GeoPoint, GeoPointError, Locale, LocationRecord, LocationRecordError,
    LocationStore, PerformanceGrade, Priority, QueryMoment, QueryMomentError, Rationale,
    ScoredSpot, SpotReason, SpotSource, StoredLocation, VehicleHealth, describe, format_distance,
    haversine_km,
};

#[cfg(feature = "spatial-index")]
pub use spotradar_core::IndexedCatalog;

#[cfg(feature = "scorer")]
pub use spotradar_scorer::{RecommenderConfig, RecommenderConfigError, SpotRecommender};

#[cfg(feature = "builtin-catalog")]
pub use spotradar_data::{
    CatalogLoadError, CatalogSaveError, builtin_catalog, load_catalog, save_catalog,
};
