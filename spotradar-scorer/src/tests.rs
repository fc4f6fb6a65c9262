//! Unit coverage for candidate selection, assessment, and ranking.

use chrono::Weekday;
use rstest::{fixture, rstest};
use spotradar_core::test_support::{CAMPUS, campus_roundabout, north_of, point, record_at};
use spotradar_core::{
    Catalog, GeoPoint, IndexedCatalog, LocationRecord, LocationStore, Priority, QueryMoment,
    Rationale, ScoredSpot, SpotSource,
};

use crate::{
    RecommenderConfig, RecommenderConfigError, SpotRecommender, rank::Ranked, rank::rank,
    temporal::assess,
};

#[fixture]
fn campus() -> GeoPoint {
    point(CAMPUS.0, CAMPUS.1)
}

#[fixture]
fn config() -> RecommenderConfig {
    RecommenderConfig::default()
}

fn at(weekday: Weekday, hour: u8) -> QueryMoment {
    QueryMoment::new(weekday, hour).expect("valid hour")
}

fn names(spots: &[ScoredSpot]) -> Vec<&str> {
    spots.iter().map(|spot| spot.name.as_str()).collect()
}

fn weekend_only(record: LocationRecord) -> LocationRecord {
    record.with_best_days([Weekday::Sat, Weekday::Sun])
}

#[rstest]
#[case(6)]
#[case(8)]
#[case(15)]
fn busy_hour_within_tolerance_is_high(config: RecommenderConfig, #[case] hour: u8) {
    let assessment = assess(&campus_roundabout(), 3.0, at(Weekday::Mon, hour), &config);
    assert_eq!(assessment.priority, Priority::High);
    assert!(matches!(assessment.rationale, Rationale::HotNow { .. }));
    assert!(!assessment.very_close);
}

#[rstest]
fn hot_now_reports_first_matching_hour(config: RecommenderConfig) {
    let assessment = assess(&campus_roundabout(), 3.0, at(Weekday::Mon, 7), &config);
    assert_eq!(assessment.rationale, Rationale::HotNow { hour: 6 });
}

#[rstest]
fn quiet_hour_before_peak_is_upcoming(config: RecommenderConfig) {
    let assessment = assess(&campus_roundabout(), 3.0, at(Weekday::Mon, 3), &config);
    assert_eq!(assessment.priority, Priority::Medium);
    assert_eq!(assessment.rationale, Rationale::Upcoming { peak_hour: 6 });
}

#[rstest]
fn quiet_hour_after_peak_is_missed(config: RecommenderConfig) {
    let assessment = assess(&campus_roundabout(), 3.0, at(Weekday::Mon, 12), &config);
    assert_eq!(assessment.priority, Priority::Medium);
    assert_eq!(assessment.rationale, Rationale::MissedPeak { peak_hour: 6 });
}

#[rstest]
fn hour_tolerance_does_not_wrap_midnight(campus: GeoPoint, config: RecommenderConfig) {
    let late = record_at("Night Stall", campus, &[23]);
    let assessment = assess(&late, 3.0, at(Weekday::Mon, 0), &config);
    assert_eq!(assessment.priority, Priority::Medium);
    assert_eq!(assessment.rationale, Rationale::Upcoming { peak_hour: 23 });
}

#[rstest]
#[case(1.9, Rationale::NearbyOffDay { weekday: Weekday::Wed })]
#[case(2.0, Rationale::Routine)]
#[case(8.0, Rationale::Routine)]
fn off_day_records_stay_low(
    config: RecommenderConfig,
    #[case] distance_km: f64,
    #[case] expected: Rationale,
) {
    let record = weekend_only(campus_roundabout());
    let assessment = assess(&record, distance_km, at(Weekday::Wed, 7), &config);
    assert_eq!(assessment.priority, Priority::Low);
    assert_eq!(assessment.rationale, expected);
}

#[rstest]
fn very_close_overrides_day_and_hour(campus: GeoPoint, config: RecommenderConfig) {
    let record = weekend_only(record_at("Dawn Stop", campus, &[3]));
    let assessment = assess(&record, 0.4, at(Weekday::Wed, 14), &config);
    assert_eq!(assessment.priority, Priority::High);
    assert!(assessment.very_close);
    assert_eq!(
        assessment.rationale,
        Rationale::NearbyOffDay {
            weekday: Weekday::Wed
        }
    );
}

#[rstest]
fn very_close_threshold_is_exclusive(config: RecommenderConfig) {
    let record = weekend_only(campus_roundabout());
    let assessment = assess(&record, 0.5, at(Weekday::Wed, 7), &config);
    assert_eq!(assessment.priority, Priority::Low);
    assert!(!assessment.very_close);
}

#[rstest]
fn rank_orders_by_tier_then_distance_then_position(campus: GeoPoint) {
    let record = campus_roundabout();
    let spot = |name: &str, distance: f64, priority: Priority| {
        let mut scored =
            ScoredSpot::from_record(&record, distance, priority, Rationale::Routine, false);
        scored.name = name.to_owned();
        scored
    };
    let ranked = rank(
        vec![
            Ranked {
                position: 0,
                spot: spot("far-high", 14.0, Priority::High),
            },
            Ranked {
                position: 1,
                spot: spot("near-medium", 0.6, Priority::Medium),
            },
            Ranked {
                position: 3,
                spot: spot("tie-late", 5.0, Priority::Low),
            },
            Ranked {
                position: 2,
                spot: spot("tie-early", 5.0, Priority::Low),
            },
        ],
        10,
    );
    assert_eq!(
        names(&ranked),
        ["far-high", "near-medium", "tie-early", "tie-late"]
    );
    assert!(ranked.iter().all(|scored| scored.location == campus));
}

#[rstest]
fn rank_truncates(campus: GeoPoint) {
    let record = record_at("Any", campus, &[7]);
    let entries = (0..4)
        .map(|position| Ranked {
            position,
            spot: ScoredSpot::from_record(&record, 1.0, Priority::Low, Rationale::Routine, false),
        })
        .collect();
    assert_eq!(rank(entries, 2).len(), 2);
}

#[rstest]
fn empty_store_yields_empty_list(campus: GeoPoint) {
    let recommender = SpotRecommender::new(Catalog::default());
    assert!(recommender.recommend(campus, at(Weekday::Mon, 7)).is_empty());
}

#[rstest]
fn spots_are_tagged_as_algorithmic(campus: GeoPoint) {
    let recommender = SpotRecommender::new(Catalog::new(vec![campus_roundabout()]));
    let spots = recommender.recommend(campus, at(Weekday::Mon, 7));
    assert_eq!(spots.len(), 1);
    assert!(spots.iter().all(|spot| spot.source == SpotSource::Algorithm));
}

#[rstest]
fn fallback_ignores_radius_when_coverage_is_sparse(campus: GeoPoint) {
    let catalog = Catalog::new(vec![
        record_at("Near", north_of(campus, 1.0), &[7]),
        record_at("Far 40", north_of(campus, 40.0), &[7]),
        record_at("Far 20", north_of(campus, 20.0), &[7]),
        record_at("Far 60", north_of(campus, 60.0), &[7]),
        record_at("Far 30", north_of(campus, 30.0), &[7]),
        record_at("Far 50", north_of(campus, 50.0), &[7]),
    ]);
    let spots = SpotRecommender::new(catalog).recommend(campus, at(Weekday::Mon, 7));
    assert_eq!(names(&spots), ["Near", "Far 20", "Far 30", "Far 40", "Far 50"]);
}

#[rstest]
fn composite_score_follows_fallback_order(campus: GeoPoint) {
    let catalog = Catalog::new(vec![
        record_at("Quiet Near", north_of(campus, 16.0), &[20]),
        record_at("Busy Far", north_of(campus, 30.0), &[7]),
    ]);
    let spots = SpotRecommender::new(catalog).recommend(campus, at(Weekday::Mon, 7));
    assert_eq!(names(&spots), ["Busy Far", "Quiet Near"]);
    let scores: Vec<f64> = spots.iter().map(ScoredSpot::composite_score).collect();
    assert!(
        scores.is_sorted_by(|a, b| a <= b),
        "scores out of order: {scores:?}"
    );
}

#[rstest]
fn radius_filter_applies_when_coverage_is_dense(campus: GeoPoint) {
    let catalog = Catalog::new(vec![
        record_at("A", north_of(campus, 1.0), &[7]),
        record_at("B", north_of(campus, 2.0), &[7]),
        record_at("C", north_of(campus, 14.9), &[7]),
        record_at("Outside", north_of(campus, 15.5), &[7]),
    ]);
    let spots = SpotRecommender::new(catalog).recommend(campus, at(Weekday::Mon, 7));
    assert_eq!(names(&spots), ["A", "B", "C"]);
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "evenly spaced offsets")]
fn indexed_and_linear_stores_agree(campus: GeoPoint) {
    let records: Vec<LocationRecord> = (0_u32..30)
        .map(|step| {
            let hours: &[u8] = if step.is_multiple_of(3) { &[7] } else { &[19] };
            record_at(
                &format!("Spot {step:02}"),
                north_of(campus, f64::from(step) * 0.7),
                hours,
            )
        })
        .collect();
    let linear = SpotRecommender::new(Catalog::new(records.clone()));
    let indexed = SpotRecommender::new(IndexedCatalog::new(Catalog::new(records)));
    let moment = at(Weekday::Thu, 7);
    assert_eq!(
        linear.recommend(campus, moment),
        indexed.recommend(campus, moment)
    );
}

#[rstest]
fn borrowed_store_is_accepted(campus: GeoPoint) {
    let catalog = Catalog::new(vec![campus_roundabout()]);
    let recommender = SpotRecommender::new(&catalog);
    assert_eq!(recommender.recommend(campus, at(Weekday::Mon, 7)).len(), 1);
    assert_eq!(recommender.store().len(), 1);
}

#[rstest]
#[case(RecommenderConfig { radius_km: -1.0, ..RecommenderConfig::default() })]
#[case(RecommenderConfig { very_close_km: f64::NAN, ..RecommenderConfig::default() })]
fn invalid_distances_are_rejected(#[case] config: RecommenderConfig) {
    let result = SpotRecommender::with_config(Catalog::default(), config);
    assert!(matches!(
        result,
        Err(RecommenderConfigError::InvalidDistance { .. })
    ));
}

#[rstest]
fn zero_result_cap_is_rejected() {
    let config = RecommenderConfig {
        max_results: 0,
        ..RecommenderConfig::default()
    };
    assert_eq!(config.validate(), Err(RecommenderConfigError::ZeroMaxResults));
}

#[rstest]
fn config_deserialises_with_defaults() {
    let config: RecommenderConfig =
        serde_json::from_str(r#"{"radius_km": 10.0}"#).expect("decode config");
    assert_eq!(config.radius_km, 10.0);
    assert_eq!(config.max_results, 10);
}
