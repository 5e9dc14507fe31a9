//! Symbol catalog for picker front ends.
//!
//! Loads symbol metadata (availability, categories, search terms), joins it
//! into an immutable [`SymbolCatalog`], and answers the filter queries a
//! picker issues on every keystroke. [`PickerState`] models the picker's
//! non-visual state on top of the catalog.

pub mod catalog;
pub mod error;
pub mod picker;

pub use catalog::{
    AVAILABILITY_FILE, CATEGORIES_FILE, Category, CategoryFilter, CategoryKey, OsVersion, Query,
    RawSource, RawSources, SEARCH_TERMS_FILE, Symbol, SymbolCatalog, UnknownCategory, load,
    load_dir, load_json_strs,
};
pub use error::{MalformedCatalogError, SourceKind};
pub use picker::PickerState;

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment override for the metadata directory.
pub const DATA_DIR_ENV: &str = "SYMBOLPICKER_DATA";
const BUNDLED_DATA_DIR: &str = "data";

fn is_data_dir(candidate: &Path) -> bool {
    candidate.join(AVAILABILITY_FILE).is_file()
}

fn data_dir_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !is_data_dir(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

/// Locate the metadata directory.
///
/// Tries, in order: the explicit path, `SYMBOLPICKER_DATA`, the build-time
/// `SYMBOLPICKER_DATA_HINT`, and the `data/` directory bundled with the crate.
pub fn find_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    let from_env = env::var(DATA_DIR_ENV).ok();
    resolve_data_dir(explicit, from_env.as_deref())
}

fn resolve_data_dir(explicit: Option<&Path>, from_env: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if is_data_dir(path) {
            return Ok(path.to_path_buf());
        }
        bail!(
            "{} does not contain {}",
            path.display(),
            AVAILABILITY_FILE
        );
    }

    if let Some(dir) = from_env.and_then(data_dir_from_hint) {
        return Ok(dir);
    }

    if let Some(dir) = option_env!("SYMBOLPICKER_DATA_HINT").and_then(data_dir_from_hint) {
        return Ok(dir);
    }

    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_DATA_DIR);
    if is_data_dir(&bundled) {
        return Ok(bundled);
    }

    bail!(
        "Unable to locate symbol metadata. Pass --data or set {DATA_DIR_ENV} to a directory containing {AVAILABILITY_FILE}."
    );
}

/// Split a comma- or whitespace-separated list, dropping empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse a category list such as `"weather, nature"`. Unknown keys are errors.
pub fn parse_category_list(value: &str) -> Result<Vec<CategoryKey>> {
    split_list(value)
        .iter()
        .map(|raw| raw.parse::<CategoryKey>().map_err(anyhow::Error::from))
        .collect()
}
