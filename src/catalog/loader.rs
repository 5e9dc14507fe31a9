//! Joins the three raw sources into a [`SymbolCatalog`].
//!
//! Availability decides which symbols exist and in what order. Category and
//! search-term entries for names absent from availability are dropped, and so
//! are category keys the registry does not know. Each symbol is assembled in a
//! builder record filled from one source at a time, then frozen; only a symbol
//! left with no category falls back to `uncategorized`.

use crate::catalog::category::{self, Category};
use crate::catalog::sources::{AvailabilitySource, RawSources};
use crate::catalog::{OsVersion, Symbol, SymbolCatalog};
use crate::error::MalformedCatalogError;
use indexmap::IndexMap;
use std::path::Path;

/// Parse the three JSON documents and join them.
pub fn load_json_strs(
    availability: &str,
    categories: &str,
    search_terms: &str,
) -> Result<SymbolCatalog, MalformedCatalogError> {
    let sources = RawSources::from_json_strs(availability, categories, search_terms)?;
    Ok(load(&sources))
}

/// Read the default file set under `dir` and join it.
pub fn load_dir(dir: &Path) -> Result<SymbolCatalog, MalformedCatalogError> {
    let sources = RawSources::from_dir(dir)?;
    Ok(load(&sources))
}

/// Join already-parsed sources. Sparse data never fails.
pub fn load(sources: &RawSources) -> SymbolCatalog {
    let mut builders: IndexMap<&str, SymbolBuilder> = sources
        .availability
        .symbols
        .iter()
        .map(|(name, year)| {
            let builder = SymbolBuilder::new(name, year, &sources.availability);
            (name.as_str(), builder)
        })
        .collect();

    let mut dropped = 0usize;
    for (name, keys) in sources.categories.iter() {
        match builders.get_mut(name) {
            Some(builder) => builder.add_categories(keys),
            None => dropped += 1,
        }
    }
    for (name, terms) in sources.search_terms.iter() {
        match builders.get_mut(name) {
            Some(builder) => builder.search_terms.extend(terms.iter().cloned()),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(
            dropped,
            "ignored category/search entries for symbols missing from availability"
        );
    }

    let symbols: Vec<Symbol> = builders.into_values().map(SymbolBuilder::freeze).collect();
    tracing::debug!(symbols = symbols.len(), "symbol catalog loaded");
    SymbolCatalog::from_symbols(symbols)
}

struct SymbolBuilder {
    name: String,
    release_year: String,
    categories: Vec<Category>,
    search_terms: Vec<String>,
    os_versions: Vec<OsVersion>,
}

impl SymbolBuilder {
    fn new(name: &str, year: &str, availability: &AvailabilitySource) -> Self {
        let os_versions = match availability.releases(year) {
            Some(releases) => releases
                .iter()
                .map(|(platform, version)| OsVersion::new(platform.as_str(), version.as_str()))
                .collect(),
            None => {
                tracing::trace!(symbol = name, year, "no release table for year");
                Vec::new()
            }
        };
        Self {
            name: name.to_string(),
            release_year: year.to_string(),
            categories: Vec::new(),
            search_terms: Vec::new(),
            os_versions,
        }
    }

    fn add_categories(&mut self, raw_keys: &[String]) {
        for raw in raw_keys {
            let resolved = category::resolve(raw);
            if resolved == Category::uncategorized() {
                tracing::trace!(
                    symbol = %self.name,
                    key = %raw,
                    "skipping unresolved category key"
                );
                continue;
            }
            if !self.categories.contains(&resolved) {
                self.categories.push(resolved);
            }
        }
    }

    fn freeze(mut self) -> Symbol {
        if self.categories.is_empty() {
            self.categories.push(Category::uncategorized());
        }
        Symbol {
            name: self.name,
            release_year: self.release_year,
            categories: self.categories,
            search_terms: self.search_terms,
            os_versions: self.os_versions,
        }
    }
}
