//! Headless state behind a symbol picker.
//!
//! A front end owns one [`PickerState`], forwards user edits to it, and on
//! every change asks it for the category menu and the visible symbols. The
//! state never caches query results; each call runs a fresh catalog query.

use crate::catalog::{Category, CategoryFilter, CategoryKey, Query, Symbol, SymbolCatalog};
use std::collections::BTreeSet;

/// Selection, search text and category choice for one open picker.
#[derive(Clone, Debug)]
pub struct PickerState {
    limited: BTreeSet<CategoryKey>,
    preset_search: String,
    selected_category: CategoryFilter,
    search_text: String,
    selected_symbol: Option<String>,
}

impl PickerState {
    /// Start a picker restricted to `limited` (empty means unrestricted) with
    /// an optional preset search term.
    pub fn new(limited: impl IntoIterator<Item = CategoryKey>, search_term: &str) -> Self {
        let limited: BTreeSet<CategoryKey> = limited.into_iter().collect();
        let selected_category = match single(&limited) {
            Some(key) => CategoryFilter::Only(key),
            None => CategoryFilter::All,
        };
        Self {
            limited,
            preset_search: search_term.to_string(),
            selected_category,
            search_text: search_term.to_string(),
            selected_symbol: None,
        }
    }

    /// Seed the current selection, e.g. from a previously chosen symbol.
    pub fn with_selected(mut self, name: impl Into<String>) -> Self {
        self.selected_symbol = Some(name.into());
        self
    }

    /// The category menu is hidden when the picker is pinned to one category
    /// or opened with a preset search term.
    pub fn shows_category_menu(&self) -> bool {
        single(&self.limited).is_none() && self.preset_search.is_empty()
    }

    pub fn shows_search_field(&self) -> bool {
        self.preset_search.is_empty()
    }

    pub fn shows_clear_button(&self) -> bool {
        !self.search_text.is_empty()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
    }

    /// Entries for the category menu, after the "all" entry.
    pub fn menu_categories(&self, catalog: &SymbolCatalog) -> Vec<Category> {
        catalog.available_categories(&self.limited)
    }

    /// The query the current state describes.
    pub fn query(&self) -> Query {
        Query::new()
            .limited_to(self.limited.iter().copied())
            .selected(self.selected_category)
            .search(self.search_text.as_str())
    }

    pub fn visible_symbols<'a>(&self, catalog: &'a SymbolCatalog) -> Vec<&'a Symbol> {
        let query = self.query();
        catalog.query(&query).collect()
    }

    /// Record a selection. Names missing from the catalog are ignored.
    pub fn choose(&mut self, catalog: &SymbolCatalog, name: &str) -> bool {
        if !catalog.contains(name) {
            tracing::debug!(symbol = name, "ignoring selection of unknown symbol");
            return false;
        }
        self.selected_symbol = Some(name.to_string());
        true
    }

    pub fn selected_symbol(&self) -> Option<&str> {
        self.selected_symbol.as_deref()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_symbol.as_deref() == Some(name)
    }
}

fn single(keys: &BTreeSet<CategoryKey>) -> Option<CategoryKey> {
    match keys.len() {
        1 => keys.first().copied(),
        _ => None,
    }
}
