//! Knowledge base files for the spot recommender.
//!
//! A catalogue file is a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "name": "Campus Roundabout",
//!     "category": "education",
//!     "zone": "Jatinangor",
//!     "lat": -6.9261,
//!     "lng": 107.7176,
//!     "best_hours": [6, 7, 16, 17],
//!     "best_days": [1, 2, 3, 4, 5],
//!     "notes": "Students heading to and from lectures."
//!   }
//! ]
//! ```
//!
//! `zone`, `notes`, and `best_days` are optional; days count from 0 = Sunday.
//! Repeated entries in `best_hours` collapse to their first occurrence, so a
//! file with duplicates does not survive a load and save unchanged.
//! Every record is validated while parsing, so a loaded [`Catalog`] is always
//! well formed. The crate also embeds a catalogue of eastern Bandung spots.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use spotradar_core::{Catalog, LocationStore};

mod error;


pub use error::{CatalogLoadError, CatalogSaveError};

/// JSON source of the embedded eastern Bandung catalogue.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../data/eastern_bandung.json");

/// Parse the embedded eastern Bandung catalogue.
///
/// # Errors
/// Returns [`CatalogLoadError::Builtin`] if the embedded JSON is malformed.
///
/// # Examples
/// ```
/// use spotradar_core::LocationStore;
///
/// let catalog = spotradar_data::builtin_catalog().expect("embedded catalogue parses");
/// assert!(!catalog.is_empty());
/// ```
pub fn builtin_catalog() -> Result<Catalog, CatalogLoadError> {
    parse_catalog(BUILTIN_CATALOG_JSON).map_err(|source| CatalogLoadError::Builtin { source })
}

/// Parse a catalogue from JSON text.
///
/// # Errors
/// Returns the decoder error when the text is not an array of valid records.
pub fn parse_catalog(json: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a catalogue from a JSON file.
///
/// # Errors
/// Returns [`CatalogLoadError::Read`] when the file cannot be read and
/// [`CatalogLoadError::Parse`] when its content is invalid.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogLoadError> {
    let text = fs_utf8::Dir::open_ambient_dir(parent_or_current(path), ambient_authority())
        .and_then(|dir| dir.read_to_string(file_name(path)?))
        .map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = parse_catalog(&text).map_err(|source| CatalogLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} records from {path}", catalog.len());
    Ok(catalog)
}

/// Write `catalog` to `path` as pretty-printed JSON, creating parent
/// directories as needed.
///
/// # Errors
/// Returns [`CatalogSaveError`] when a directory cannot be created or the
/// file cannot be written.
pub fn save_catalog(catalog: &Catalog, path: &Utf8Path) -> Result<(), CatalogSaveError> {
    let json = serde_json::to_string_pretty(catalog).map_err(|source| CatalogSaveError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    let parent = parent_or_current(path);
    let dir = open_or_create_dir(parent).map_err(|source| CatalogSaveError::CreateDirectory {
        path: parent.to_path_buf(),
        source,
    })?;
    file_name(path)
        .and_then(|name| dir.write(name, json))
        .map_err(|source| CatalogSaveError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("wrote {} records to {path}", catalog.len());
    Ok(())
}

fn parent_or_current(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

fn file_name(path: &Utf8Path) -> std::io::Result<&str> {
    path.file_name()
        .ok_or_else(|| std::io::Error::other("catalogue path should include a file name"))
}

/// Open `dir`, creating it and its ancestors first when missing.
fn open_or_create_dir(dir: &Utf8Path) -> std::io::Result<fs_utf8::Dir> {
    let (base, relative) = if dir.is_absolute() {
        (Utf8Path::new("/"), dir.strip_prefix("/").unwrap_or(dir))
    } else {
        (Utf8Path::new("."), dir)
    };
    let root = fs_utf8::Dir::open_ambient_dir(base, ambient_authority())?;
    if relative.as_str().is_empty() {
        return Ok(root);
    }
    root.create_dir_all(relative)?;
    root.open_dir(relative)
}
