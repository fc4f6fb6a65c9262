//! Command-line interface for the spot radar.
//!
//! `spotradar recommend` ranks nearby spots for a driver, `spotradar grade`
//! scores a day's orders and the vehicle's service state, and
//! `spotradar catalog` lists or exports the knowledge base. Every option can
//! also come from a configuration file or a `SPOTRADAR_*` environment
//! variable through `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use log::debug;
use tracing_subscriber::EnvFilter;

mod catalog;
mod error;
mod grade;
mod output;
mod recommend;

pub use error::CliError;

use catalog::{CatalogArgs, run_catalog_with};
use grade::{GradeArgs, run_grade_with};
use recommend::{RecommendArgs, run_recommend_with};

pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_AT: &str = "at";
pub(crate) const ARG_LOCALE: &str = "locale";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_RADIUS_KM: &str = "radius-km";
pub(crate) const ARG_MAX_RESULTS: &str = "max-results";
pub(crate) const ARG_ORDERS: &str = "orders";
pub(crate) const ARG_TARGET: &str = "target";
pub(crate) const ARG_TOTAL_ORDERS: &str = "total-orders";
pub(crate) const ARG_EXPORT: &str = "export";
pub(crate) const ENV_LAT: &str = "SPOTRADAR_CMDS_RECOMMEND_LAT";
pub(crate) const ENV_LNG: &str = "SPOTRADAR_CMDS_RECOMMEND_LNG";
pub(crate) const ENV_ORDERS: &str = "SPOTRADAR_CMDS_GRADE_ORDERS";
pub(crate) const ENV_TARGET: &str = "SPOTRADAR_CMDS_GRADE_TARGET";

/// Run the spot radar CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// knowledge base cannot be read or written, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            // `--help` and `--version` arrive as errors that belong on stdout.
            return err.print().map_err(CliError::WriteOutput);
        }
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    init_logging(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout)
}

fn run_with(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Grade(args) => run_grade_with(args, writer),
        Command::Catalog(args) => run_catalog_with(args, writer),
    }
}

/// Install a stderr subscriber honouring `RUST_LOG`, falling back to `warn`
/// or, with `--verbose`, `debug`. Library crates log through `log`, which the
/// subscriber picks up.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!("log subscriber already installed: {err}");
    }
}

const fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

#[derive(Debug, Parser)]
#[command(
    name = "spotradar",
    about = "Find busy pick-up spots near a ride-hailing driver",
    version
)]
struct Cli {
    /// Log engine decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank nearby spots for the driver's position and time.
    Recommend(RecommendArgs),
    /// Grade a day's orders and report vehicle service health.
    Grade(GradeArgs),
    /// List or export the knowledge base.
    Catalog(CatalogArgs),
}

#[cfg(test)]
mod tests;
