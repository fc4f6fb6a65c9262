//! The wall-clock moment a recommendation is computed for.
//!
//! Only the local weekday and hour matter to the recommender, so a
//! [`QueryMoment`] keeps just those two fields. Weekday indices follow the
//! Sunday-first convention used by the knowledge base (0 = Sunday).

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Weekday};
use thiserror::Error;

/// Errors returned by [`QueryMoment::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum QueryMomentError {
    /// The hour was not in `0..=23`.
    #[error("hour {hour} is outside 0..=23")]
    HourOutOfRange {
        /// Rejected hour.
        hour: u8,
    },
}

/// Local weekday and hour of a query.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use spotradar_core::QueryMoment;
///
/// let at = NaiveDate::from_ymd_opt(2024, 5, 6)
///     .and_then(|d| d.and_hms_opt(7, 15, 0))
///     .expect("valid timestamp");
/// let moment = QueryMoment::from_naive(&at);
/// assert_eq!(moment.weekday(), Weekday::Mon);
/// assert_eq!(moment.hour(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryMoment {
    weekday: Weekday,
    hour: u8,
}

impl QueryMoment {
    /// Construct a moment from a weekday and hour.
    ///
    /// # Errors
    /// Returns [`QueryMomentError::HourOutOfRange`] when `hour > 23`.
    pub const fn new(weekday: Weekday, hour: u8) -> Result<Self, QueryMomentError> {
        if hour > 23 {
            return Err(QueryMomentError::HourOutOfRange { hour });
        }
        Ok(Self { weekday, hour })
    }

    /// Take the wall-clock weekday and hour of `at` in its own time zone.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self::from_naive(&at.naive_local())
    }

    /// Take the weekday and hour of a naive local timestamp.
    #[must_use]
    pub fn from_naive(at: &NaiveDateTime) -> Self {
        Self {
            weekday: at.weekday(),
            // chrono guarantees `hour() < 24`.
            hour: u8::try_from(at.hour()).unwrap_or_default(),
        }
    }

    /// Read the host clock in the local time zone.
    #[must_use]
    pub fn now_local() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Local weekday.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Local hour in `0..=23`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Weekday index with 0 = Sunday.
    #[must_use]
    pub const fn day_index(self) -> u8 {
        weekday_index(self.weekday)
    }
}

/// Map a Sunday-first index (`0..=6`) to a [`Weekday`].
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use spotradar_core::weekday_from_index;
///
/// assert_eq!(weekday_from_index(0), Some(Weekday::Sun));
/// assert_eq!(weekday_from_index(7), None);
/// ```
#[must_use]
pub const fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Sunday-first index of `weekday` (0 = Sunday, 6 = Saturday).
#[must_use]
pub const fn weekday_index(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}
