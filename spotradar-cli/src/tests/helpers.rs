//! Helpers for parsing invocations and staging knowledge base files.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Coordinates of the campus roundabout in the built-in knowledge base.
pub(super) const CAMPUS_LAT: &str = "-6.9261";
pub(super) const CAMPUS_LNG: &str = "107.7176";

/// A Monday morning in Western Indonesia Time.
pub(super) const MONDAY_MORNING: &str = "2024-05-06T07:00:00+07:00";

/// A single night market roughly 3 km north of the campus.
pub(super) const NIGHT_MARKET_JSON: &str = r#"[
  {
    "name": "Night Market",
    "category": "culinary-night",
    "zone": "Jatinangor",
    "lat": -6.8991,
    "lng": 107.7176,
    "best_hours": [19, 20, 21],
    "notes": "Food stalls open after sunset."
  }
]"#;

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Parse `args` after the program name and run the command into a buffer.
pub(super) fn invoke(args: &[&str]) -> (Result<(), CliError>, String) {
    let argv = std::iter::once("spotradar").chain(args.iter().copied());
    let mut stdout = Vec::new();
    let result = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| run_with(cli, &mut stdout));
    let text = String::from_utf8(stdout).expect("stdout utf-8");
    (result, text)
}
