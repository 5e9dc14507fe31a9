//! Raw metadata sources consumed by the loader.
//!
//! Three independently keyed JSON documents describe the symbol set:
//! availability (name to release year plus a year to platform/version table),
//! categories (name to raw category keys) and search terms (name to aliases).
//! The availability document is authoritative for which symbols exist; the
//! other two are optional and may be sparse.
//!
//! The categories and search-terms documents are accepted either as a map
//! keyed by symbol name or as a list of `{ "name": ..., <list field>: [...] }`
//! records.

use crate::catalog::{AVAILABILITY_FILE, CATEGORIES_FILE, SEARCH_TERMS_FILE};
use crate::error::{MalformedCatalogError, SourceKind};
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Parsing shared by the three raw source documents.
pub trait RawSource: Sized {
    const KIND: SourceKind;

    /// The serde shape the document must deserialize into.
    type Shape: DeserializeOwned;

    fn from_shape(shape: Self::Shape) -> Result<Self, MalformedCatalogError>;

    fn parse_str(raw: &str) -> Result<Self, MalformedCatalogError> {
        let shape = serde_json::from_str(raw).map_err(|source| MalformedCatalogError::Parse {
            kind: Self::KIND,
            path: None,
            source,
        })?;
        Self::from_shape(shape)
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self, MalformedCatalogError> {
        let shape =
            serde_json::from_reader(reader).map_err(|source| MalformedCatalogError::Parse {
                kind: Self::KIND,
                path: None,
                source,
            })?;
        Self::from_shape(shape)
    }

    fn from_path(path: &Path) -> Result<Self, MalformedCatalogError> {
        let file = File::open(path).map_err(|source| MalformedCatalogError::Io {
            kind: Self::KIND,
            path: Some(path.to_path_buf()),
            source,
        })?;
        let shape = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            MalformedCatalogError::Parse {
                kind: Self::KIND,
                path: Some(path.to_path_buf()),
                source,
            }
        })?;
        Self::from_shape(shape)
    }
}

/// Name to release-year map plus the year to platform/version table.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AvailabilitySource {
    pub symbols: IndexMap<String, String>,
    pub year_to_release: IndexMap<String, IndexMap<String, String>>,
}

impl AvailabilitySource {
    /// Platform/version pairs for a release year, in document order.
    pub fn releases(&self, year: &str) -> Option<&IndexMap<String, String>> {
        self.year_to_release.get(year)
    }
}

impl RawSource for AvailabilitySource {
    const KIND: SourceKind = SourceKind::Availability;
    type Shape = AvailabilitySource;

    fn from_shape(shape: Self::Shape) -> Result<Self, MalformedCatalogError> {
        if shape.symbols.keys().any(|name| name.trim().is_empty()) {
            return Err(MalformedCatalogError::Invalid {
                kind: Self::KIND,
                reason: "symbol names must not be empty".to_string(),
            });
        }
        Ok(shape)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum CategoriesShape {
    Map(IndexMap<String, Vec<String>>),
    Records(Vec<CategoriesRecord>),
}

#[derive(Deserialize)]
pub struct CategoriesRecord {
    name: String,
    categories: Vec<String>,
}

/// Symbol name to raw category keys.
#[derive(Clone, Debug, Default)]
pub struct CategoriesSource {
    entries: IndexMap<String, Vec<String>>,
}

impl CategoriesSource {
    /// Raw keys for a symbol; empty when the symbol has no entry.
    pub fn keys_for(&self, name: &str) -> &[String] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RawSource for CategoriesSource {
    const KIND: SourceKind = SourceKind::Categories;
    type Shape = CategoriesShape;

    fn from_shape(shape: Self::Shape) -> Result<Self, MalformedCatalogError> {
        let entries = match shape {
            CategoriesShape::Map(entries) => entries,
            CategoriesShape::Records(records) => records
                .into_iter()
                .map(|record| (record.name, record.categories))
                .collect(),
        };
        Ok(Self { entries })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum SearchTermsShape {
    Map(IndexMap<String, Vec<String>>),
    Records(Vec<SearchTermsRecord>),
}

#[derive(Deserialize)]
pub struct SearchTermsRecord {
    name: String,
    #[serde(rename = "searchTerms", alias = "search_terms")]
    search_terms: Vec<String>,
}

/// Symbol name to alias strings used for text matching.
#[derive(Clone, Debug, Default)]
pub struct SearchTermsSource {
    entries: IndexMap<String, Vec<String>>,
}

impl SearchTermsSource {
    /// Aliases for a symbol; empty when the symbol has no entry.
    pub fn terms_for(&self, name: &str) -> &[String] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RawSource for SearchTermsSource {
    const KIND: SourceKind = SourceKind::SearchTerms;
    type Shape = SearchTermsShape;

    fn from_shape(shape: Self::Shape) -> Result<Self, MalformedCatalogError> {
        let entries = match shape {
            SearchTermsShape::Map(entries) => entries,
            SearchTermsShape::Records(records) => records
                .into_iter()
                .map(|record| (record.name, record.search_terms))
                .collect(),
        };
        Ok(Self { entries })
    }
}

/// The three raw sources, ready to be joined.
#[derive(Clone, Debug, Default)]
pub struct RawSources {
    pub availability: AvailabilitySource,
    pub categories: CategoriesSource,
    pub search_terms: SearchTermsSource,
}

impl RawSources {
    /// Parse all three documents from in-memory JSON.
    pub fn from_json_strs(
        availability: &str,
        categories: &str,
        search_terms: &str,
    ) -> Result<Self, MalformedCatalogError> {
        Ok(Self {
            availability: AvailabilitySource::parse_str(availability)?,
            categories: CategoriesSource::parse_str(categories)?,
            search_terms: SearchTermsSource::parse_str(search_terms)?,
        })
    }

    /// Read the default file set from a data directory.
    ///
    /// The availability file must exist; a missing categories or search-terms
    /// file is read as an empty source.
    pub fn from_dir(dir: &Path) -> Result<Self, MalformedCatalogError> {
        let availability = AvailabilitySource::from_path(&dir.join(AVAILABILITY_FILE))?;
        let categories = optional_source::<CategoriesSource>(&dir.join(CATEGORIES_FILE))?;
        let search_terms = optional_source::<SearchTermsSource>(&dir.join(SEARCH_TERMS_FILE))?;
        Ok(Self {
            availability,
            categories,
            search_terms,
        })
    }
}

fn optional_source<S: RawSource + Default>(path: &Path) -> Result<S, MalformedCatalogError> {
    match S::from_path(path) {
        Err(MalformedCatalogError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            let kind = S::KIND;
            tracing::debug!(path = %path.display(), %kind, "optional source missing");
            Ok(S::default())
        }
        other => other,
    }
}
