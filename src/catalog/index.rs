//! Indexed, immutable view of a loaded symbol set.
//!
//! Symbols keep load order for display; a name index answers existence
//! checks. Queries are linear scans with cheap per-symbol predicates and are
//! recomputed on every call.

use crate::catalog::category::{Category, CategoryFilter, CategoryKey};
use crate::catalog::{OsVersion, Symbol};
use std::collections::{BTreeSet, HashMap};

/// Loaded symbols plus a derived index keyed by name.
#[derive(Debug, Default)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
    by_name: HashMap<String, usize>,
    // CategoryKey orders by declaration, so this iterates in registry order.
    used: BTreeSet<CategoryKey>,
}

impl SymbolCatalog {
    pub(crate) fn from_symbols(symbols: Vec<Symbol>) -> Self {
        let by_name = symbols
            .iter()
            .enumerate()
            .map(|(idx, symbol)| (symbol.name.clone(), idx))
            .collect();
        let used = symbols.iter().flat_map(Symbol::category_keys).collect();
        Self {
            symbols,
            by_name,
            used,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates symbols in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Resolve a symbol by name.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.by_name.get(name).map(|&idx| &self.symbols[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Categories used by at least one symbol, in registry order.
    ///
    /// A non-empty `limited` set narrows the result to its intersection with
    /// the categories in use.
    pub fn available_categories(&self, limited: &BTreeSet<CategoryKey>) -> Vec<Category> {
        self.used
            .iter()
            .filter(|key| limited.is_empty() || limited.contains(*key))
            .map(CategoryKey::category)
            .collect()
    }

    /// Symbols matching every filter in `query`, in load order. The iterator
    /// borrows only the catalog.
    pub fn query<'a>(&'a self, query: &Query) -> impl Iterator<Item = &'a Symbol> + use<'a> {
        let matcher = Matcher::new(query);
        self.symbols
            .iter()
            .filter(move |symbol| matcher.matches(symbol))
    }
}

/// Filter arguments for [`SymbolCatalog::query`]. The default query matches
/// every symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// When non-empty, symbols must carry at least one of these categories.
    pub limited_categories: BTreeSet<CategoryKey>,
    pub selected: CategoryFilter,
    /// Case-insensitive substring over name and search terms; empty matches all.
    pub search_text: String,
    /// When set, symbols must ship on this platform at or before this version.
    pub available_on: Option<OsVersion>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limited_to(mut self, keys: impl IntoIterator<Item = CategoryKey>) -> Self {
        self.limited_categories = keys.into_iter().collect();
        self
    }

    pub fn selected(mut self, filter: impl Into<CategoryFilter>) -> Self {
        self.selected = filter.into();
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn available_on(mut self, version: OsVersion) -> Self {
        self.available_on = Some(version);
        self
    }
}

struct Matcher {
    limited: BTreeSet<CategoryKey>,
    selected: CategoryFilter,
    needle: Option<String>,
    available_on: Option<OsVersion>,
}

impl Matcher {
    fn new(query: &Query) -> Self {
        let needle =
            (!query.search_text.is_empty()).then(|| query.search_text.to_lowercase());
        Self {
            limited: query.limited_categories.clone(),
            selected: query.selected,
            needle,
            available_on: query.available_on.clone(),
        }
    }

    fn matches(&self, symbol: &Symbol) -> bool {
        let limited = &self.limited;
        if !limited.is_empty() && !symbol.category_keys().any(|key| limited.contains(&key)) {
            return false;
        }
        if !symbol.category_keys().any(|key| self.selected.admits(key)) {
            return false;
        }
        if let Some(needle) = &self.needle {
            if !symbol.matches_lowercase(needle) {
                return false;
            }
        }
        if let Some(target) = &self.available_on {
            if !symbol.os_versions.iter().any(|v| v.available_by(target)) {
                return false;
            }
        }
        true
    }
}
