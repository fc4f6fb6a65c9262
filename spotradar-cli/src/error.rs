//! Error types emitted by the spot radar CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.
//! Messages name the failing step; the entry point prints the source chain
//! underneath.

use std::sync::Arc;

use spotradar_core::{GeoPointError, ParseLocaleError};
use spotradar_data::{CatalogLoadError, CatalogSaveError};
use spotradar_scorer::RecommenderConfigError;
use thiserror::Error;

/// Errors emitted by the spot radar CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// The driver's position is unknown, so distances cannot be computed.
    #[error("cannot compute yet: driver {field} is unknown (set --{field} or {env})")]
    MissingPosition {
        /// Name of the missing coordinate option.
        field: &'static str,
        /// Environment variable that can supply the coordinate.
        env: &'static str,
    },
    /// The driver's coordinates are out of range or not finite.
    #[error("invalid driver position")]
    InvalidPosition(#[from] GeoPointError),
    /// The `--at` value is not an RFC 3339 timestamp.
    #[error("invalid timestamp {value:?} (expected RFC 3339, e.g. 2024-05-06T07:30:00+07:00)")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// The locale tag is not supported.
    #[error(transparent)]
    InvalidLocale(#[from] ParseLocaleError),
    /// The output format is not supported.
    #[error("unknown output format {value:?} (expected 'text' or 'json')")]
    InvalidFormat {
        /// The rejected input.
        value: String,
    },
    /// Engine overrides failed validation.
    #[error("invalid recommender settings")]
    InvalidSettings(#[from] RecommenderConfigError),
    /// A performance grade needs a positive daily target.
    #[error("daily order target must be greater than zero")]
    ZeroTarget,
    /// Reading the knowledge base failed.
    #[error("failed to load knowledge base")]
    LoadCatalog(#[from] CatalogLoadError),
    /// Exporting the knowledge base failed.
    #[error("failed to export knowledge base")]
    SaveCatalog(#[from] CatalogSaveError),
    /// Serializing JSON output failed.
    #[error("failed to serialize output")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to standard output failed.
    #[error("failed to write output")]
    WriteOutput(#[source] std::io::Error),
}
