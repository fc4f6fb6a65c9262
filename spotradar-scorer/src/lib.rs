//! Spot recommendation engine.
//!
//! [`SpotRecommender`] ranks the records of a
//! [`LocationStore`](spotradar_core::LocationStore) for a driver at a given
//! point and moment:
//!
//! 1. Records within [`RecommenderConfig::radius_km`] become candidates. When
//!    fewer than [`RecommenderConfig::fallback_threshold`] qualify, the
//!    [`RecommenderConfig::fallback_size`] nearest records are used instead,
//!    whatever their distance.
//! 2. Each candidate gets a [`Priority`](spotradar_core::Priority) from its
//!    busy hours and days, with very close records forced to `High`.
//! 3. Candidates are ordered by tier, then distance, and the list is capped
//!    at [`RecommenderConfig::max_results`].
//!
//! The engine is synchronous and side-effect free apart from `debug` logs, so
//! one recommender can serve concurrent callers through shared references.
//!
//! # Examples
//!
//! ```
//! use chrono::Weekday;
//! use spotradar_core::{Catalog, Category, GeoPoint, LocationRecord, Priority, QueryMoment};
//! use spotradar_scorer::SpotRecommender;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let campus = GeoPoint::new(-6.9261, 107.7176)?;
//! let record = LocationRecord::new("Campus Roundabout", Category::Education, campus, [6, 7, 16, 17])?;
//! let recommender = SpotRecommender::new(Catalog::new(vec![record]));
//!
//! let spots = recommender.recommend(campus, QueryMoment::new(Weekday::Mon, 7)?);
//! assert_eq!(spots.len(), 1);
//! assert_eq!(spots[0].priority, Priority::High);
//! assert_eq!(spots[0].formatted_distance, "0m");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use log::debug;
use spotradar_core::{
    GeoPoint, LocationRecord, LocationStore, QueryMoment, ScoredSpot, StoredLocation,
    bounding_box, haversine_km,
};

mod config;
mod rank;
mod temporal;

#[cfg(test)]
mod tests;

pub use config::{
    DEFAULT_BEST_HOUR_TOLERANCE, DEFAULT_FALLBACK_SIZE, DEFAULT_FALLBACK_THRESHOLD,
    DEFAULT_MAX_RESULTS, DEFAULT_NEARBY_OFF_DAY_KM, DEFAULT_RADIUS_KM, DEFAULT_VERY_CLOSE_KM,
    RecommenderConfig, RecommenderConfigError,
};

use rank::{Ranked, rank};
use temporal::assess;

/// A record paired with its distance from the query point.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    position: usize,
    record: &'a LocationRecord,
    distance_km: f64,
}

impl<'a> Candidate<'a> {
    fn measure(origin: GeoPoint, stored: StoredLocation<'a>) -> Self {
        Self {
            position: stored.position,
            record: stored.record,
            distance_km: haversine_km(origin, stored.record.location()),
        }
    }
}

/// Ranks knowledge base records for a driver's position and time.
#[derive(Debug, Clone)]
pub struct SpotRecommender<S> {
    store: S,
    config: RecommenderConfig,
}

impl<S: LocationStore> SpotRecommender<S> {
    /// Create a recommender with the default thresholds.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: RecommenderConfig::default(),
        }
    }

    /// Create a recommender with custom thresholds.
    ///
    /// # Errors
    /// Returns [`RecommenderConfigError`] when `config` fails validation.
    pub fn with_config(
        store: S,
        config: RecommenderConfig,
    ) -> Result<Self, RecommenderConfigError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Active thresholds.
    #[must_use]
    pub const fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// The knowledge base being ranked.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Rank spots for a driver at `origin` at `moment`, best first.
    ///
    /// Returns an empty list only when the knowledge base is empty. Identical
    /// inputs always produce identical output.
    #[must_use]
    pub fn recommend(&self, origin: GeoPoint, moment: QueryMoment) -> Vec<ScoredSpot> {
        let candidates = self.candidates(origin);
        let scored = candidates
            .into_iter()
            .map(|candidate| {
                let assessment =
                    assess(candidate.record, candidate.distance_km, moment, &self.config);
                Ranked {
                    position: candidate.position,
                    spot: ScoredSpot::from_record(
                        candidate.record,
                        candidate.distance_km,
                        assessment.priority,
                        assessment.rationale,
                        assessment.very_close,
                    ),
                }
            })
            .collect();
        rank(scored, self.config.max_results)
    }

    /// Records within the radius, or the nearest few when coverage is sparse.
    fn candidates(&self, origin: GeoPoint) -> Vec<Candidate<'_>> {
        if self.store.is_empty() {
            debug!("knowledge base is empty; nothing to recommend");
            return Vec::new();
        }

        let radius_km = self.config.radius_km;
        let pool = match bounding_box(origin, radius_km) {
            Some(bbox) => self.store.locations_in_bbox(&bbox),
            None => self.store.locations(),
        };
        let within: Vec<Candidate<'_>> = pool
            .map(|stored| Candidate::measure(origin, stored))
            .filter(|candidate| candidate.distance_km <= radius_km)
            .collect();

        if within.len() >= self.config.fallback_threshold {
            debug!(
                "{} of {} records within {radius_km} km",
                within.len(),
                self.store.len()
            );
            return within;
        }

        debug!(
            "only {} records within {radius_km} km; using the {} nearest of {}",
            within.len(),
            self.config.fallback_size,
            self.store.len()
        );
        let mut nearest: Vec<Candidate<'_>> = self
            .store
            .locations()
            .map(|stored| Candidate::measure(origin, stored))
            .collect();
        nearest.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.position.cmp(&b.position))
        });
        nearest.truncate(self.config.fallback_size);
        nearest
    }
}
