//! `grade` command: daily performance grade and vehicle health.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotradar_core::{PerformanceGrade, VehicleHealth};

use crate::{
    ARG_FORMAT, ARG_ORDERS, ARG_TARGET, ARG_TOTAL_ORDERS, CliError, ENV_ORDERS, ENV_TARGET,
    output::{OutputFormat, parse_format, write_json, write_line},
};

/// CLI arguments for the `grade` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Grade the orders completed today against a daily target \
                 (S at 120% and above, A at 100%, B at 75%, C at 50%, D \
                 below). With --total-orders, also report how far the \
                 vehicle is into its 400-order service interval.",
    about = "Grade a day's orders and report vehicle service health"
)]
#[ortho_config(prefix = "SPOTRADAR")]
pub(crate) struct GradeArgs {
    /// Orders completed today.
    #[arg(long = ARG_ORDERS, value_name = "count")]
    #[serde(default)]
    pub(crate) orders: Option<u32>,
    /// Daily order target.
    #[arg(long = ARG_TARGET, value_name = "count")]
    #[serde(default)]
    pub(crate) target: Option<u32>,
    /// Lifetime orders on the vehicle.
    #[arg(long = ARG_TOTAL_ORDERS, value_name = "count")]
    #[serde(default)]
    pub(crate) total_orders: Option<u64>,
    /// Output format: `text` or `json`.
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<String>,
}

impl GradeArgs {
    pub(crate) fn into_config(self) -> Result<GradeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GradeConfig::try_from(merged)
    }
}

/// Resolved `grade` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GradeConfig {
    pub(crate) orders: u32,
    pub(crate) target: u32,
    pub(crate) total_orders: Option<u64>,
    pub(crate) format: OutputFormat,
}

impl TryFrom<GradeArgs> for GradeConfig {
    type Error = CliError;

    fn try_from(args: GradeArgs) -> Result<Self, Self::Error> {
        let orders = args.orders.ok_or(CliError::MissingArgument {
            field: ARG_ORDERS,
            env: ENV_ORDERS,
        })?;
        let target = args.target.ok_or(CliError::MissingArgument {
            field: ARG_TARGET,
            env: ENV_TARGET,
        })?;
        Ok(Self {
            orders,
            target,
            total_orders: args.total_orders,
            format: parse_format(args.format.as_deref())?,
        })
    }
}

/// Grade and optional vehicle report, as printed by `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct GradeReport {
    pub(crate) orders: u32,
    pub(crate) target: u32,
    pub(crate) grade: PerformanceGrade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) vehicle: Option<VehicleReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct VehicleReport {
    pub(crate) total_orders: u64,
    pub(crate) health_percent: u8,
    pub(crate) orders_until_service: u64,
    pub(crate) service_due: bool,
}

impl From<VehicleHealth> for VehicleReport {
    fn from(health: VehicleHealth) -> Self {
        Self {
            total_orders: health.total_orders(),
            health_percent: health.health_percent(),
            orders_until_service: health.orders_until_service(),
            service_due: health.service_due(),
        }
    }
}

impl GradeConfig {
    pub(crate) fn report(&self) -> Result<GradeReport, CliError> {
        let grade =
            PerformanceGrade::from_orders(self.orders, self.target).ok_or(CliError::ZeroTarget)?;
        Ok(GradeReport {
            orders: self.orders,
            target: self.target,
            grade,
            vehicle: self
                .total_orders
                .map(|total| VehicleHealth::from_total_orders(total).into()),
        })
    }
}

pub(crate) fn run_grade_with(args: GradeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = config.report()?;
    match config.format {
        OutputFormat::Json => write_json(writer, &report),
        OutputFormat::Text => write_report(writer, &report),
    }
}

fn write_report(writer: &mut dyn Write, report: &GradeReport) -> Result<(), CliError> {
    write_line(
        writer,
        &format!(
            "Grade {}: {} of {} orders",
            report.grade, report.orders, report.target
        ),
    )?;
    let Some(vehicle) = report.vehicle else {
        return Ok(());
    };
    write_line(
        writer,
        &format!(
            "Vehicle health {}% after {} orders, {} until service",
            vehicle.health_percent, vehicle.total_orders, vehicle.orders_until_service
        ),
    )?;
    if vehicle.service_due {
        write_line(writer, "Service due")?;
    }
    Ok(())
}
