//! Entry point for the `spotradar` command.
#![forbid(unsafe_code)]

use std::error::Error as _;

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn main() {
    if let Err(err) = spotradar_cli::run() {
        eprintln!("spotradar: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}
