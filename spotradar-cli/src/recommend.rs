//! `recommend` command: rank spots around the driver.

use std::io::Write;

use camino::Utf8PathBuf;
use chrono::DateTime;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotradar_core::{
    GeoPoint, IndexedCatalog, Locale, QueryMoment, ScoredSpot, day_name, describe,
};
use spotradar_scorer::{RecommenderConfig, SpotRecommender};

use crate::{
    ARG_AT, ARG_CATALOG, ARG_FORMAT, ARG_LAT, ARG_LNG, ARG_LOCALE, ARG_MAX_RESULTS, ARG_RADIUS_KM,
    CliError, ENV_LAT, ENV_LNG,
    catalog::load_knowledge_base,
    output::{OutputFormat, parse_format, write_json, write_line},
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank knowledge base spots for a driver at the given \
                 coordinates. Spots busy at this hour come first, then spots \
                 busy later today, then the rest, each tier nearest first. \
                 Without --at the local clock is used.",
    about = "Rank nearby spots for the driver's position and time"
)]
#[ortho_config(prefix = "SPOTRADAR")]
pub(crate) struct RecommendArgs {
    /// Driver latitude in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Driver longitude in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// JSON knowledge base to use instead of the built-in one.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Query time as an RFC 3339 timestamp, e.g. 2024-05-06T07:30:00+07:00.
    #[arg(long = ARG_AT, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) at: Option<String>,
    /// Reason language: `en` or `id`.
    #[arg(long = ARG_LOCALE, value_name = "tag")]
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Output format: `text` or `json`.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
    /// Search radius in kilometres.
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Maximum number of spots to print.
    #[arg(long = ARG_MAX_RESULTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Driver position.
    pub(crate) origin: GeoPoint,
    /// Knowledge base file; `None` selects the built-in catalogue.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Fixed query moment; `None` reads the local clock at run time.
    pub(crate) moment: Option<QueryMoment>,
    pub(crate) locale: Locale,
    pub(crate) format: OutputFormat,
    /// Engine thresholds after overrides.
    pub(crate) engine: RecommenderConfig,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingPosition {
            field: ARG_LAT,
            env: ENV_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingPosition {
            field: ARG_LNG,
            env: ENV_LNG,
        })?;
        let origin = GeoPoint::new(lat, lng)?;
        let moment = args.at.as_deref().map(parse_moment).transpose()?;
        let locale = args
            .locale
            .as_deref()
            .map(str::parse::<Locale>)
            .transpose()?
            .unwrap_or_default();

        let mut engine = RecommenderConfig::default();
        if let Some(radius_km) = args.radius_km {
            engine.radius_km = radius_km;
        }
        if let Some(max_results) = args.max_results {
            engine.max_results = max_results;
        }
        engine.validate()?;

        Ok(Self {
            origin,
            catalog: args.catalog,
            moment,
            locale,
            format: parse_format(args.format.as_deref())?,
            engine,
        })
    }
}

/// Read the weekday and hour from an RFC 3339 timestamp, in its own offset.
pub(crate) fn parse_moment(value: &str) -> Result<QueryMoment, CliError> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| QueryMoment::from_datetime(&at))
        .map_err(|source| CliError::InvalidTimestamp {
            value: value.to_owned(),
            source,
        })
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_knowledge_base(config.catalog.as_deref())?;
    let moment = config.moment.unwrap_or_else(QueryMoment::now_local);
    let recommender = SpotRecommender::with_config(IndexedCatalog::new(catalog), config.engine)?;
    let spots = recommender.recommend(config.origin, moment);
    debug!(
        "{} spots for ({}, {}) at {:?} {:02}:00",
        spots.len(),
        config.origin.lat(),
        config.origin.lng(),
        moment.weekday(),
        moment.hour()
    );
    match config.format {
        OutputFormat::Json => write_json(writer, &spots),
        OutputFormat::Text => write_ranking(writer, &spots, moment, config.locale),
    }
}

fn write_ranking(
    writer: &mut dyn Write,
    spots: &[ScoredSpot],
    moment: QueryMoment,
    locale: Locale,
) -> Result<(), CliError> {
    write_line(
        writer,
        &format!(
            "Spots for {} {:02}:00",
            day_name(moment.weekday(), locale),
            moment.hour()
        ),
    )?;
    if spots.is_empty() {
        return write_line(writer, "No spots in the knowledge base.");
    }
    for (rank, spot) in (1_usize..).zip(spots) {
        write_line(writer, &spot_heading(rank, spot))?;
        let reason = describe(&spot.reason, locale);
        if !reason.is_empty() {
            write_line(writer, &format!("    {reason}"))?;
        }
    }
    Ok(())
}

/// First line of a ranked entry:
/// ` 1. [HIGH] Campus Roundabout 0m (education, Jatinangor)`.
#[must_use]
pub(crate) fn spot_heading(rank: usize, spot: &ScoredSpot) -> String {
    let zone = if spot.zone.is_empty() {
        String::new()
    } else {
        format!(", {}", spot.zone)
    };
    format!(
        "{rank:>2}. [{}] {} {} ({}{zone})",
        spot.priority, spot.name, spot.formatted_distance, spot.category
    )
}
