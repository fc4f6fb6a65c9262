//! Errors raised while reading or writing knowledge base files.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalogue.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// Opening or reading the file failed.
    #[error("failed to read catalogue {path}")]
    Read {
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file was not a valid JSON array of records.
    #[error("failed to parse catalogue {path}")]
    Parse {
        /// Requested catalogue path.
        path: Utf8PathBuf,
        /// Decoder error, including record validation failures.
        #[source]
        source: serde_json::Error,
    },
    /// The embedded catalogue failed to parse.
    #[error("built-in catalogue is malformed")]
    Builtin {
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while saving a catalogue.
#[derive(Debug, Error)]
pub enum CatalogSaveError {
    /// Creating the parent directory failed.
    #[error("failed to create parent directory {path}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Encoding the records failed.
    #[error("failed to encode catalogue for {path}")]
    Encode {
        /// Destination path.
        path: Utf8PathBuf,
        /// Encoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the file failed.
    #[error("failed to write catalogue {path}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
