//! `catalog` command: list or export the knowledge base.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotradar_core::{Catalog, Locale, LocationRecord, LocationStore, day_name};
use spotradar_data::{builtin_catalog, load_catalog, save_catalog};

use crate::{
    ARG_CATALOG, ARG_EXPORT, ARG_FORMAT, CliError,
    output::{OutputFormat, parse_format, write_json, write_line},
};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print every record of the knowledge base, or write it to a \
                 JSON file that can be edited and passed back with --catalog.",
    about = "List or export the knowledge base"
)]
#[ortho_config(prefix = "SPOTRADAR")]
pub(crate) struct CatalogArgs {
    /// JSON knowledge base to use instead of the built-in one.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Write the knowledge base to this path instead of listing it.
    #[arg(long = ARG_EXPORT, value_name = "path")]
    #[serde(default)]
    pub(crate) export: Option<Utf8PathBuf>,
    /// Listing format: `text` or `json`.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
}

impl CatalogArgs {
    pub(crate) fn into_config(self) -> Result<CatalogConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CatalogConfig::try_from(merged)
    }
}

/// Resolved `catalog` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogConfig {
    /// Knowledge base file; `None` selects the built-in catalogue.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Export destination.
    pub(crate) export: Option<Utf8PathBuf>,
    pub(crate) format: OutputFormat,
}

impl TryFrom<CatalogArgs> for CatalogConfig {
    type Error = CliError;

    fn try_from(args: CatalogArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            format: parse_format(args.format.as_deref())?,
            catalog: args.catalog,
            export: args.export,
        })
    }
}

/// Load the knowledge base from `path`, or the built-in one when absent.
pub(crate) fn load_knowledge_base(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let catalog = path.map_or_else(builtin_catalog, load_catalog)?;
    debug!(
        "using {} knowledge base with {} records",
        path.map_or("built-in", Utf8Path::as_str),
        catalog.len()
    );
    Ok(catalog)
}

pub(crate) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_knowledge_base(config.catalog.as_deref())?;
    if let Some(path) = config.export.as_deref() {
        save_catalog(&catalog, path)?;
        return write_line(writer, &format!("Wrote {} records to {path}", catalog.len()));
    }
    match config.format {
        OutputFormat::Json => write_json(writer, &catalog),
        OutputFormat::Text => write_listing(writer, &catalog),
    }
}

fn write_listing(writer: &mut dyn Write, catalog: &Catalog) -> Result<(), CliError> {
    write_line(writer, &format!("{} records", catalog.len()))?;
    for record in catalog.records() {
        write_line(writer, &describe_record(record))?;
    }
    Ok(())
}

/// One listing line: name, category, zone, busy hours, and days.
#[must_use]
pub(crate) fn describe_record(record: &LocationRecord) -> String {
    let hours = record
        .best_hours()
        .iter()
        .map(|hour| format!("{hour:02}:00"))
        .collect::<Vec<_>>()
        .join(", ");
    let days = record.best_days().map_or_else(
        || "every day".to_owned(),
        |weekdays| {
            weekdays
                .iter()
                .map(|weekday| day_name(*weekday, Locale::English))
                .collect::<Vec<_>>()
                .join(", ")
        },
    );
    let zone = if record.zone().is_empty() {
        String::new()
    } else {
        format!(", {}", record.zone())
    };
    format!(
        "{} ({}{zone}) busy {hours} on {days}",
        record.name(),
        record.category()
    )
}
