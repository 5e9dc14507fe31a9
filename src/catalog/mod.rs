//! Symbol catalog wiring.
//!
//! Raw metadata on disk (see `data/`) is parsed by [`sources`], joined into
//! [`Symbol`] records by [`loader`], and held in an immutable
//! [`SymbolCatalog`] that answers category listings and filter queries.
//! Categories come from the closed registry in [`category`].

pub mod category;
pub mod index;
pub mod loader;
pub mod sources;
pub mod version;

pub use category::{Category, CategoryFilter, CategoryKey, UnknownCategory};
pub use index::{Query, SymbolCatalog};
pub use loader::{load, load_dir, load_json_strs};
pub use sources::{AvailabilitySource, CategoriesSource, RawSource, RawSources, SearchTermsSource};
pub use version::OsVersion;

use serde::Serialize;

/// Availability document: symbol name to release year, plus the year table.
pub const AVAILABILITY_FILE: &str = "name_availability.json";
/// Categories document: symbol name to raw category keys.
pub const CATEGORIES_FILE: &str = "symbol_categories.json";
/// Search-terms document: symbol name to aliases.
pub const SEARCH_TERMS_FILE: &str = "symbol_search.json";

/// One joined symbol record. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub name: String,
    pub release_year: String,
    /// Never empty; unresolved symbols carry exactly `uncategorized`.
    pub categories: Vec<Category>,
    pub search_terms: Vec<String>,
    pub os_versions: Vec<OsVersion>,
}

impl Symbol {
    pub fn has_category(&self, key: CategoryKey) -> bool {
        self.categories.iter().any(|category| category.key == key)
    }

    pub fn category_keys(&self) -> impl Iterator<Item = CategoryKey> + '_ {
        self.categories.iter().map(|category| category.key)
    }

    /// Case-insensitive substring match over the name and every search term.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .search_terms
                .iter()
                .any(|term| term.to_lowercase().contains(needle))
    }

    /// Release for a platform, if the symbol ships there.
    pub fn os_version(&self, platform: &str) -> Option<&OsVersion> {
        self.os_versions
            .iter()
            .find(|version| version.platform.eq_ignore_ascii_case(platform))
    }
}
