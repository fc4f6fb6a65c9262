//! Behavioural coverage for ranking spots around a driver.

use std::cell::RefCell;

use chrono::Weekday;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use spotradar_core::test_support::{
    CAMPUS, campus_roundabout, north_of, northward_chain, point, record_at,
};
use spotradar_core::{
    Catalog, GeoPoint, HOT_NOW_MARKER, Locale, Priority, QueryMoment, ScoredSpot,
    VERY_CLOSE_MARKER, describe,
};
use spotradar_scorer::SpotRecommender;

fn campus() -> GeoPoint {
    point(CAMPUS.0, CAMPUS.1)
}

#[expect(clippy::expect_used, reason = "scenario hours are literals")]
fn at(weekday: Weekday, hour: u8) -> QueryMoment {
    QueryMoment::new(weekday, hour).expect("valid hour")
}

/// Knowledge base prepared by the scenario.
#[fixture]
fn catalog() -> RefCell<Catalog> {
    RefCell::new(Catalog::default())
}

/// Ranked output of the most recent query.
#[fixture]
fn spots() -> RefCell<Vec<ScoredSpot>> {
    RefCell::new(Vec::new())
}

fn recommend(
    catalog: &RefCell<Catalog>,
    spots: &RefCell<Vec<ScoredSpot>>,
    origin: GeoPoint,
    moment: QueryMoment,
) {
    let borrowed = catalog.borrow();
    let recommender = SpotRecommender::new(&*borrowed);
    *spots.borrow_mut() = recommender.recommend(origin, moment);
}

fn first(spots: &RefCell<Vec<ScoredSpot>>) -> ScoredSpot {
    match spots.borrow().first() {
        Some(spot) => spot.clone(),
        None => panic!("expected at least one spot"),
    }
}

#[given("a knowledge base holding only the campus roundabout")]
fn only_campus(catalog: &RefCell<Catalog>) {
    *catalog.borrow_mut() = Catalog::new(vec![campus_roundabout()]);
}

#[given("an empty knowledge base")]
fn empty(catalog: &RefCell<Catalog>) {
    *catalog.borrow_mut() = Catalog::default();
}

#[given("a knowledge base with one record 0.4 km away that is busy only at 03:00")]
fn dawn_record(catalog: &RefCell<Catalog>) {
    let record = record_at("Dawn Bakery", north_of(campus(), 0.4), &[3])
        .with_best_days([Weekday::Sat]);
    *catalog.borrow_mut() = Catalog::new(vec![record]);
}

#[given("a knowledge base with one nearby record and five records beyond 15 km")]
fn sparse_coverage(catalog: &RefCell<Catalog>) {
    let origin = campus();
    let mut records = vec![record_at("Near", north_of(origin, 1.0), &[7])];
    for distance in [60.0, 20.0, 40.0, 30.0, 50.0] {
        records.push(record_at(
            &format!("Far {distance:.0}"),
            north_of(origin, distance),
            &[7],
        ));
    }
    *catalog.borrow_mut() = Catalog::new(records);
}

#[given("a knowledge base with twenty records busy at 07:00 within 10 km")]
fn dense_coverage(catalog: &RefCell<Catalog>) {
    *catalog.borrow_mut() = Catalog::new(northward_chain(campus(), 20, 0.45, &[7]));
}

#[given("a knowledge base with a quiet record 1 km away and a busy record 12 km away")]
fn quiet_and_busy(catalog: &RefCell<Catalog>) {
    let origin = campus();
    *catalog.borrow_mut() = Catalog::new(vec![
        record_at("Quiet Corner", north_of(origin, 1.0), &[19]),
        record_at("Busy Gate", north_of(origin, 12.0), &[7]),
    ]);
}

#[when("the driver asks for spots at the campus roundabout on Monday at 07:00")]
fn ask_at_campus_monday(catalog: &RefCell<Catalog>, spots: &RefCell<Vec<ScoredSpot>>) {
    recommend(catalog, spots, campus(), at(Weekday::Mon, 7));
}

#[when("the driver asks for spots 12 km north of the campus on Monday at 07:00")]
fn ask_north_monday(catalog: &RefCell<Catalog>, spots: &RefCell<Vec<ScoredSpot>>) {
    recommend(catalog, spots, north_of(campus(), 12.0), at(Weekday::Mon, 7));
}

#[when("the driver asks for spots at the campus roundabout on Wednesday at 14:00")]
fn ask_at_campus_wednesday(catalog: &RefCell<Catalog>, spots: &RefCell<Vec<ScoredSpot>>) {
    recommend(catalog, spots, campus(), at(Weekday::Wed, 14));
}

#[then("the first spot is HIGH priority")]
fn first_is_high(spots: &RefCell<Vec<ScoredSpot>>) {
    assert_eq!(first(spots).priority, Priority::High);
}

#[then("the first spot is marked hot now")]
fn first_is_hot(spots: &RefCell<Vec<ScoredSpot>>) {
    let text = describe(&first(spots).reason, Locale::English);
    assert!(text.starts_with(HOT_NOW_MARKER), "unexpected reason: {text}");
}

#[then("the first spot is marked very close")]
fn first_is_very_close(spots: &RefCell<Vec<ScoredSpot>>) {
    let spot = first(spots);
    assert!(spot.reason.very_close);
    assert!(spot.reason.to_string().starts_with(VERY_CLOSE_MARKER));
}

#[then("the first spot is 0m away")]
fn first_is_zero_metres(spots: &RefCell<Vec<ScoredSpot>>) {
    let spot = first(spots);
    assert_eq!(spot.formatted_distance, "0m");
    assert!(spot.distance_km < 1e-9);
}

#[then("the first spot is 12.0km away")]
fn first_is_twelve_km(spots: &RefCell<Vec<ScoredSpot>>) {
    assert_eq!(first(spots).formatted_distance, "12.0km");
}

#[then("no spots are returned")]
fn none_returned(spots: &RefCell<Vec<ScoredSpot>>) {
    assert!(spots.borrow().is_empty());
}

#[then("the spots are the five nearest records in distance order")]
fn five_nearest(spots: &RefCell<Vec<ScoredSpot>>) {
    let names: Vec<String> = spots.borrow().iter().map(|spot| spot.name.clone()).collect();
    assert_eq!(names, ["Near", "Far 20", "Far 30", "Far 40", "Far 50"]);
}

#[then("exactly ten spots are returned")]
fn ten_returned(spots: &RefCell<Vec<ScoredSpot>>) {
    assert_eq!(spots.borrow().len(), 10);
}

#[then("every spot is within 15 km")]
fn all_within_radius(spots: &RefCell<Vec<ScoredSpot>>) {
    assert!(spots.borrow().iter().all(|spot| spot.distance_km <= 15.0));
}

#[then("the busy record ranks first")]
fn busy_first(spots: &RefCell<Vec<ScoredSpot>>) {
    let ranked = spots.borrow();
    let names: Vec<&str> = ranked.iter().map(|spot| spot.name.as_str()).collect();
    assert_eq!(names, ["Busy Gate", "Quiet Corner"]);
    assert!(
        ranked
            .iter()
            .map(|spot| spot.priority)
            .eq([Priority::High, Priority::Medium])
    );
}

#[scenario(path = "tests/features/recommend.feature", index = 0)]
fn parked_at_busy_campus(catalog: RefCell<Catalog>, spots: RefCell<Vec<ScoredSpot>>) {
    let _ = (catalog, spots);
}

#[scenario(path = "tests/features/recommend.feature", index = 1)]
fn busy_campus_from_twelve_km(catalog: RefCell<Catalog>, spots: RefCell<Vec<ScoredSpot>>) {
    let _ = (catalog, spots);
}

#[scenario(path = "tests/features/recommend.feature", index = 2)]
fn empty_knowledge_base(catalog: RefCell<Catalog>, spots: RefCell<Vec<ScoredSpot>>) {
    let _ = (catalog, spots);
}

#[scenario(path = "tests/features/recommend.feature", index = 3)]
fn very_close_wins(catalog: RefCell<Catalog>, spots: RefCell<Vec<ScoredSpot>>) {
    let _ = (catalog, spots);
}

#[scenario(path = "tests/features/recommend.feature", index = 4)]
fn sparse_fallback(catalog: RefCell<Catalog>, spots: RefCell<Vec<ScoredSpot>>) {
    let _ = (catalog, spots);
}

#[scenario(path = "tests/features/recommend.feature", index = 5)]
fn dense_truncation(catalog: RefCell<Catalog>, spots: RefCell<Vec<ScoredSpot>>) {
    let _ = (catalog, spots);
}

#[scenario(path = "tests/features/recommend.feature", index = 6)]
fn busy_outranks_quiet(catalog: RefCell<Catalog>, spots: RefCell<Vec<ScoredSpot>>) {
    let _ = (catalog, spots);
}
