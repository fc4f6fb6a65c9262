//! Tunables for the spot recommender.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search radius around the driver, in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 15.0;
/// Fewer in-radius candidates than this triggers the nearest-records fallback.
pub const DEFAULT_FALLBACK_THRESHOLD: usize = 3;
/// Number of nearest records taken by the fallback.
pub const DEFAULT_FALLBACK_SIZE: usize = 5;
/// Hours either side of a busy hour that still count as busy.
pub const DEFAULT_BEST_HOUR_TOLERANCE: u8 = 1;
/// Off-day records closer than this get the nearby rationale.
pub const DEFAULT_NEARBY_OFF_DAY_KM: f64 = 2.0;
/// Records closer than this are always `High`.
pub const DEFAULT_VERY_CLOSE_KM: f64 = 0.5;
/// Length cap on the ranked list.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Tunable thresholds applied by [`crate::SpotRecommender`].
///
/// The defaults reproduce the production behaviour; tests and benchmarks may
/// shrink or widen them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Maximum distance for regular candidates, inclusive.
    pub radius_km: f64,
    /// Minimum in-radius candidates before the fallback is skipped.
    pub fallback_threshold: usize,
    /// Records taken by the fallback, nearest first.
    pub fallback_size: usize,
    /// Busy-hour tolerance in whole hours, inclusive.
    pub best_hour_tolerance: u8,
    /// Distance below which an off-day record is still suggested.
    pub nearby_off_day_km: f64,
    /// Distance below which a record is forced to `High`.
    pub very_close_km: f64,
    /// Maximum number of spots returned.
    pub max_results: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            fallback_size: DEFAULT_FALLBACK_SIZE,
            best_hour_tolerance: DEFAULT_BEST_HOUR_TOLERANCE,
            nearby_off_day_km: DEFAULT_NEARBY_OFF_DAY_KM,
            very_close_km: DEFAULT_VERY_CLOSE_KM,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Errors raised by [`RecommenderConfig::validate`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum RecommenderConfigError {
    /// A distance threshold was negative, NaN, or infinite.
    #[error("{field} must be a finite, non-negative distance (got {value})")]
    InvalidDistance {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The busy-hour tolerance exceeded a day.
    #[error("best-hour tolerance {tolerance} exceeds 23 hours")]
    ToleranceOutOfRange {
        /// Rejected tolerance.
        tolerance: u8,
    },
    /// The result cap was zero.
    #[error("max_results must be at least 1")]
    ZeroMaxResults,
}

impl RecommenderConfig {
    /// Check every threshold.
    ///
    /// # Errors
    /// Returns [`RecommenderConfigError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), RecommenderConfigError> {
        for (field, value) in [
            ("radius_km", self.radius_km),
            ("nearby_off_day_km", self.nearby_off_day_km),
            ("very_close_km", self.very_close_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RecommenderConfigError::InvalidDistance { field, value });
            }
        }
        if self.best_hour_tolerance > 23 {
            return Err(RecommenderConfigError::ToleranceOutOfRange {
                tolerance: self.best_hour_tolerance,
            });
        }
        if self.max_results == 0 {
            return Err(RecommenderConfigError::ZeroMaxResults);
        }
        Ok(())
    }
}
