//! Knowledge base records: named places with their busy hours and days.

use std::{fmt, str::FromStr};

use chrono::Weekday;
use thiserror::Error;

use crate::{
    GeoPoint, GeoPointError,
    moment::{weekday_from_index, weekday_index},
};

/// Broad kind of place a record describes.
///
/// # Examples
/// ```
/// use spotradar_core::Category;
///
/// assert_eq!(Category::CulinaryNight.as_str(), "culinary-night");
/// assert_eq!("market".parse::<Category>(), Ok(Category::Market));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    /// Campuses and schools.
    Education,
    /// Restaurants and food courts.
    Culinary,
    /// Traditional markets.
    Market,
    /// Housing estates and dormitories.
    Residential,
    /// Factories and industrial estates.
    Industrial,
    /// Hospitals and clinics.
    Health,
    /// Stations and terminals.
    Transport,
    /// Shopping malls.
    Mall,
    /// Warehouses and parcel hubs.
    Logistics,
    /// Offices serving the public.
    Service,
    /// Public facilities such as sports halls.
    Facility,
    /// Cafes and places people linger.
    Hangout,
    /// Shop rows and commercial strips.
    Commercial,
    /// Night food stalls.
    CulinaryNight,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Education,
        Self::Culinary,
        Self::Market,
        Self::Residential,
        Self::Industrial,
        Self::Health,
        Self::Transport,
        Self::Mall,
        Self::Logistics,
        Self::Service,
        Self::Facility,
        Self::Hangout,
        Self::Commercial,
        Self::CulinaryNight,
    ];

    /// Return the category label in kebab-case.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Culinary => "culinary",
            Self::Market => "market",
            Self::Residential => "residential",
            Self::Industrial => "industrial",
            Self::Health => "health",
            Self::Transport => "transport",
            Self::Mall => "mall",
            Self::Logistics => "logistics",
            Self::Service => "service",
            Self::Facility => "facility",
            Self::Hangout => "hangout",
            Self::Commercial => "commercial",
            Self::CulinaryNight => "culinary-night",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category '{value}'")]
pub struct ParseCategoryError {
    /// The rejected label.
    pub value: String,
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError {
                value: s.to_owned(),
            })
    }
}

/// Errors returned when constructing a [`LocationRecord`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationRecordError {
    /// The record has a blank name.
    #[error("location name must not be empty")]
    MissingName,
    /// No busy hours were supplied.
    #[error("location '{name}' must list at least one best hour")]
    EmptyBestHours {
        /// Name of the offending record.
        name: String,
    },
    /// A busy hour was not a valid hour of the day.
    #[error("best hour {hour} is outside 0..=23")]
    HourOutOfRange {
        /// Rejected hour.
        hour: u8,
    },
    /// A serialised weekday index was not in `0..=6`.
    #[error("best day {day} is outside 0..=6 (0 = Sunday)")]
    DayOutOfRange {
        /// Rejected day index.
        day: u8,
    },
    /// The coordinates were invalid.
    #[error(transparent)]
    InvalidLocation(#[from] GeoPointError),
}

/// A named place in the knowledge base.
///
/// Records are immutable once built. `best_hours` keeps the order it was
/// given in (the first entry is the headline peak) and is never empty.
/// `best_days` is `None` when the place is busy every day.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use spotradar_core::{Category, GeoPoint, LocationRecord};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let roundabout = LocationRecord::new(
///     "Campus Roundabout",
///     Category::Education,
///     GeoPoint::new(-6.9261, 107.7176)?,
///     [6, 7, 16, 17],
/// )?
/// .with_notes("Students heading to morning lectures");
///
/// assert_eq!(roundabout.peak_hour(), 6);
/// assert!(roundabout.matches_day(Weekday::Sun));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "LocationRecordWire", into = "LocationRecordWire")
)]
pub struct LocationRecord {
    name: String,
    category: Category,
    zone: String,
    notes: String,
    location: GeoPoint,
    best_hours: Vec<u8>,
    best_days: Option<Vec<Weekday>>,
}

impl LocationRecord {
    /// Validate and construct a record with empty zone and notes.
    ///
    /// Duplicate hours are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns [`LocationRecordError`] when the name is blank, no hours are
    /// given, or an hour exceeds 23.
    pub fn new(
        label: impl Into<String>,
        category: Category,
        location: GeoPoint,
        best_hours: impl IntoIterator<Item = u8>,
    ) -> Result<Self, LocationRecordError> {
        let name = label.into();
        if name.trim().is_empty() {
            return Err(LocationRecordError::MissingName);
        }
        let mut hours: Vec<u8> = Vec::new();
        for hour in best_hours {
            if hour > 23 {
                return Err(LocationRecordError::HourOutOfRange { hour });
            }
            if !hours.contains(&hour) {
                hours.push(hour);
            }
        }
        if hours.is_empty() {
            return Err(LocationRecordError::EmptyBestHours { name });
        }
        Ok(Self {
            name,
            category,
            zone: String::new(),
            notes: String::new(),
            location,
            best_hours: hours,
            best_days: None,
        })
    }

    /// Set the district label.
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Set the static rationale shown alongside recommendations.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Restrict the record to the given weekdays.
    ///
    /// Days are stored Sunday-first without duplicates. An empty set means
    /// the place never matches on day.
    #[must_use]
    pub fn with_best_days(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days: Vec<Weekday> = weekdays.into_iter().collect();
        days.sort_by_key(|day| weekday_index(*day));
        days.dedup();
        self.best_days = Some(days);
        self
    }

    /// Human-readable label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of place.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// District label; display only.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Static rationale text.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Position of the place.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    /// Busy hours in their original order.
    #[must_use]
    pub fn best_hours(&self) -> &[u8] {
        &self.best_hours
    }

    /// Busy weekdays, or `None` for every day.
    #[must_use]
    pub fn best_days(&self) -> Option<&[Weekday]> {
        self.best_days.as_deref()
    }

    /// The first listed busy hour.
    #[must_use]
    pub fn peak_hour(&self) -> u8 {
        // `best_hours` is non-empty by construction.
        self.best_hours.first().copied().unwrap_or_default()
    }

    /// First busy hour within `tolerance` hours of `hour`, if any.
    ///
    /// The difference is a plain absolute difference; it does not wrap
    /// around midnight.
    #[must_use]
    pub fn best_hour_near(&self, hour: u8, tolerance: u8) -> Option<u8> {
        self.best_hours
            .iter()
            .copied()
            .find(|best| best.abs_diff(hour) <= tolerance)
    }

    /// Whether the record is relevant on `weekday`.
    #[must_use]
    pub fn matches_day(&self, weekday: Weekday) -> bool {
        self.best_days
            .as_ref()
            .is_none_or(|days| days.contains(&weekday))
    }
}

/// Flat serialised form of a [`LocationRecord`].
///
/// Days travel as integers with 0 = Sunday.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LocationRecordWire {
    name: String,
    category: Category,
    #[serde(default)]
    zone: String,
    #[serde(default)]
    notes: String,
    lat: f64,
    lng: f64,
    best_hours: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    best_days: Option<Vec<u8>>,
}

#[cfg(feature = "serde")]
impl TryFrom<LocationRecordWire> for LocationRecord {
    type Error = LocationRecordError;

    fn try_from(wire: LocationRecordWire) -> Result<Self, Self::Error> {
        let location = GeoPoint::new(wire.lat, wire.lng)?;
        let record = Self::new(wire.name, wire.category, location, wire.best_hours)?
            .with_zone(wire.zone)
            .with_notes(wire.notes);
        let Some(indices) = wire.best_days else {
            return Ok(record);
        };
        let days = indices
            .into_iter()
            .map(|day| {
                weekday_from_index(day).ok_or(LocationRecordError::DayOutOfRange { day })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(record.with_best_days(days))
    }
}

#[cfg(feature = "serde")]
impl From<LocationRecord> for LocationRecordWire {
    fn from(record: LocationRecord) -> Self {
        Self {
            name: record.name,
            category: record.category,
            zone: record.zone,
            notes: record.notes,
            lat: record.location.lat(),
            lng: record.location.lng(),
            best_hours: record.best_hours,
            best_days: record
                .best_days
                .map(|days| days.into_iter().map(weekday_index).collect()),
        }
    }
}
