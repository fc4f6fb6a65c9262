//! Human-readable rendering of [`SpotReason`] values.
//!
//! The recommender only emits structured reasons. Phrasing lives here so a
//! presentation layer can pick a locale without touching the scoring code.

use std::{fmt, str::FromStr};

use chrono::Weekday;
use thiserror::Error;

use crate::{
    moment::weekday_index,
    spot::{Rationale, SpotReason},
};

/// Marker prefixed to spots that are busy right now.
pub const HOT_NOW_MARKER: &str = "🔥";

/// Marker prefixed to spots that are practically under the driver's wheels.
pub const VERY_CLOSE_MARKER: &str = "📍";

/// Language used for reason text and day names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// English phrasing.
    #[default]
    English,
    /// Indonesian phrasing.
    Indonesian,
}

impl Locale {
    /// Short language tag (`en` or `id`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Indonesian => "id",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown locale tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown locale '{value}' (expected 'en' or 'id')")]
pub struct ParseLocaleError {
    /// The rejected tag.
    pub value: String,
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "id" | "indonesian" => Ok(Self::Indonesian),
            _ => Err(ParseLocaleError {
                value: s.to_owned(),
            }),
        }
    }
}

const ENGLISH_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const INDONESIAN_DAYS: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];

/// Localised weekday name.
///
/// # Examples
/// ```
/// use chrono::Weekday;
/// use spotradar_core::{Locale, day_name};
///
/// assert_eq!(day_name(Weekday::Sun, Locale::Indonesian), "Minggu");
/// assert_eq!(day_name(Weekday::Fri, Locale::English), "Friday");
/// ```
#[must_use]
pub fn day_name(weekday: Weekday, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::English => &ENGLISH_DAYS,
        Locale::Indonesian => &INDONESIAN_DAYS,
    };
    table
        .get(usize::from(weekday_index(weekday)))
        .copied()
        .unwrap_or_default()
}

/// Render a reason as display text.
///
/// The very-close marker comes first, then the rationale headline, then the
/// record's notes.
///
/// # Examples
/// ```
/// use spotradar_core::{Locale, Rationale, SpotReason, describe};
///
/// let reason = SpotReason {
///     rationale: Rationale::HotNow { hour: 7 },
///     very_close: false,
///     notes: "Morning lectures".into(),
/// };
/// assert_eq!(describe(&reason, Locale::English), "🔥 Hot now: Morning lectures");
/// ```
#[must_use]
pub fn describe(reason: &SpotReason, locale: Locale) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if reason.very_close {
        parts.push(very_close_phrase(locale).to_owned());
    }
    let notes = reason.notes.trim();
    match headline(reason.rationale, locale) {
        Some(text) if notes.is_empty() => parts.push(text),
        Some(text) => parts.push(format!("{text} {notes}")),
        None if notes.is_empty() => {}
        None => parts.push(notes.to_owned()),
    }
    parts.join(" ")
}

fn very_close_phrase(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "📍 Very close!",
        Locale::Indonesian => "📍 Dekat banget!",
    }
}

fn headline(rationale: Rationale, locale: Locale) -> Option<String> {
    let text = match (rationale, locale) {
        (Rationale::Routine, _) => return None,
        (Rationale::HotNow { .. }, Locale::English) => format!("{HOT_NOW_MARKER} Hot now:"),
        (Rationale::HotNow { .. }, Locale::Indonesian) => format!("{HOT_NOW_MARKER} Lagi gacor:"),
        (Rationale::Upcoming { peak_hour }, Locale::English) => {
            format!("Gets busy at {peak_hour:02}:00.")
        }
        (Rationale::Upcoming { peak_hour }, Locale::Indonesian) => {
            format!("Mulai ramai jam {peak_hour:02}:00.")
        }
        (Rationale::MissedPeak { peak_hour }, Locale::English) => {
            format!("You just missed the {peak_hour:02}:00 peak.")
        }
        (Rationale::MissedPeak { peak_hour }, Locale::Indonesian) => {
            format!("Baru lewat jam ramai {peak_hour:02}:00.")
        }
        (Rationale::NearbyOffDay { weekday }, Locale::English) => format!(
            "Nearby, worth a try even on {}.",
            day_name(weekday, locale)
        ),
        (Rationale::NearbyOffDay { weekday }, Locale::Indonesian) => format!(
            "Dekat, boleh dicoba walau hari {}.",
            day_name(weekday, locale)
        ),
    };
    Some(text)
}

impl fmt::Display for SpotReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self, Locale::English))
    }
}
