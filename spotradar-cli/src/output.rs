//! Output formats shared by the subcommands.

use std::{io::Write, str::FromStr};

use serde::Serialize;

use crate::CliError;

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidFormat {
                value: s.to_owned(),
            }),
        }
    }
}

/// Parse an optional format option, defaulting to text.
pub(crate) fn parse_format(value: Option<&str>) -> Result<OutputFormat, CliError> {
    value.map_or(Ok(OutputFormat::Text), str::parse::<OutputFormat>)
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    write_line(writer, &payload)
}

pub(crate) fn write_line(writer: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writeln!(writer, "{line}").map_err(CliError::WriteOutput)
}
