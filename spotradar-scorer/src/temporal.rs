//! Per-record priority from the query moment and distance.

use spotradar_core::{LocationRecord, Priority, QueryMoment, Rationale};

use crate::RecommenderConfig;

/// Outcome of assessing one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Assessment {
    pub(crate) priority: Priority,
    pub(crate) rationale: Rationale,
    pub(crate) very_close: bool,
}

/// Assign a tier and rationale to `record` seen from `distance_km` away.
///
/// Precedence, lowest first: routine `Low`; on-day busy hour `High`; on-day
/// quiet hour `Medium`; off-day but nearby `Low` with its own rationale.
/// Proximity below [`RecommenderConfig::very_close_km`] then forces `High`
/// while keeping the underlying rationale.
pub(crate) fn assess(
    record: &LocationRecord,
    distance_km: f64,
    moment: QueryMoment,
    config: &RecommenderConfig,
) -> Assessment {
    let on_day = record.matches_day(moment.weekday());
    let busy_hour = record.best_hour_near(moment.hour(), config.best_hour_tolerance);

    let (priority, rationale) = match (on_day, busy_hour) {
        (true, Some(hour)) => (Priority::High, Rationale::HotNow { hour }),
        (true, None) => {
            let peak_hour = record.peak_hour();
            let rationale = if peak_hour > moment.hour() {
                Rationale::Upcoming { peak_hour }
            } else {
                Rationale::MissedPeak { peak_hour }
            };
            (Priority::Medium, rationale)
        }
        (false, _) if distance_km < config.nearby_off_day_km => (
            Priority::Low,
            Rationale::NearbyOffDay {
                weekday: moment.weekday(),
            },
        ),
        (false, _) => (Priority::Low, Rationale::Routine),
    };

    let very_close = distance_km < config.very_close_km;
    Assessment {
        priority: if very_close { Priority::High } else { priority },
        rationale,
        very_close,
    }
}
