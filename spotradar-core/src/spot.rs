//! Recommendation results.
//!
//! A [`ScoredSpot`] is built fresh for every query and carries no identity
//! across calls. Its [`SpotReason`] is structured data; turning it into text
//! is left to [`crate::reason`].

use std::fmt;

use chrono::Weekday;

use crate::{Category, GeoPoint, LocationRecord};

/// Composite-score gap between adjacent tiers, in kilometres.
///
/// Exceeds half the Earth's circumference, so no great-circle distance can
/// lift a spot over the tier above it.
pub const TIER_GAP_KM: f64 = 20_100.0;

/// Recommendation tier, best first.
///
/// The derived ordering sorts `High` before `Medium` before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Priority {
    /// Busy right now, or the driver is practically there.
    High,
    /// Right day, but outside the busy window.
    Medium,
    /// Wrong day or no temporal signal.
    Low,
}

impl Priority {
    /// Ordinal rank: 0 for `High`, 1 for `Medium`, 2 for `Low`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Composite-score weight of the tier: `rank() * TIER_GAP_KM`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "rank scaled by the tier gap")]
    pub fn weight(self) -> f64 {
        f64::from(self.rank()) * TIER_GAP_KM
    }

    /// Upper-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a spot received its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum Rationale {
    /// No temporal signal; the static notes speak for themselves.
    Routine,
    /// A listed busy hour is within the tolerance of now.
    HotNow {
        /// The matched busy hour.
        hour: u8,
    },
    /// The day matches and the headline peak is later today.
    Upcoming {
        /// The headline peak hour.
        peak_hour: u8,
    },
    /// The day matches but the headline peak has already passed.
    MissedPeak {
        /// The headline peak hour.
        peak_hour: u8,
    },
    /// Wrong day, but close enough to be worth a look.
    NearbyOffDay {
        /// The weekday of the query.
        weekday: Weekday,
    },
}

/// Structured explanation attached to a [`ScoredSpot`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotReason {
    /// Temporal or proximity signal behind the tier.
    pub rationale: Rationale,
    /// Set when proximity forced the spot to `High`.
    pub very_close: bool,
    /// Static notes copied from the record.
    pub notes: String,
}

/// Where a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpotSource {
    /// Ranked by the spot recommender from the knowledge base.
    #[default]
    Algorithm,
    /// Derived from the driver's own order history.
    History,
}

/// A knowledge base record ranked against a query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredSpot {
    /// Display name.
    pub name: String,
    /// Kind of place.
    pub category: Category,
    /// District label.
    pub zone: String,
    /// Coordinates for map pins and navigation links.
    pub location: GeoPoint,
    /// Great-circle distance from the query point.
    pub distance_km: f64,
    /// Structured explanation.
    pub reason: SpotReason,
    /// Recommendation tier.
    pub priority: Priority,
    /// Distance rendered with [`format_distance`].
    pub formatted_distance: String,
    /// Provenance tag.
    pub source: SpotSource,
}

impl ScoredSpot {
    /// Build an algorithm-sourced spot from a record and its assessment.
    #[must_use]
    pub fn from_record(
        record: &LocationRecord,
        distance_km: f64,
        priority: Priority,
        rationale: Rationale,
        very_close: bool,
    ) -> Self {
        Self {
            name: record.name().to_owned(),
            category: record.category(),
            zone: record.zone().to_owned(),
            location: record.location(),
            distance_km,
            reason: SpotReason {
                rationale,
                very_close,
                notes: record.notes().to_owned(),
            },
            priority,
            formatted_distance: format_distance(distance_km),
            source: SpotSource::Algorithm,
        }
    }

    /// Composite score: tier weight plus distance. Lower is better, and
    /// sorting by it reproduces the recommender's order.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "score is weight plus distance")]
    pub fn composite_score(&self) -> f64 {
        self.priority.weight() + self.distance_km
    }
}

/// Render a distance for display: whole metres while the rounded value stays
/// below 1000, otherwise kilometres with one decimal.
///
/// # Examples
/// ```
/// use spotradar_core::format_distance;
///
/// assert_eq!(format_distance(0.0), "0m");
/// assert_eq!(format_distance(0.4567), "457m");
/// assert_eq!(format_distance(12.0), "12.0km");
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "kilometres to metres")]
pub fn format_distance(distance_km: f64) -> String {
    let metres = (distance_km * 1000.0).round();
    if metres < 1000.0 {
        format!("{metres:.0}m")
    } else {
        format!("{distance_km:.1}km")
    }
}
