// Catalog loading and query guard rails against fixture and bundled metadata.
mod support;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeSet;
use symbolpicker::{
    CATEGORIES_FILE, CategoryFilter, CategoryKey, MalformedCatalogError, OsVersion, Query,
    SEARCH_TERMS_FILE, SourceKind, SymbolCatalog, load_dir,
};

use support::{FixtureData, bundled_data_dir, names, star_fixture};

fn bundled() -> Result<SymbolCatalog> {
    Ok(load_dir(&bundled_data_dir())?)
}

#[test]
fn star_fixture_end_to_end() -> Result<()> {
    let fixture = star_fixture()?;
    let catalog = load_dir(fixture.path())?;
    assert_eq!(catalog.len(), 1);

    let star = catalog.get("star.fill").expect("star.fill loaded");
    assert_eq!(star.release_year, "13");
    assert_eq!(star.os_versions, [OsVersion::new("iOS", "13.0")]);
    assert_eq!(star.os_versions[0].to_string(), "iOS 13.0");
    assert_eq!(
        star.category_keys().collect::<Vec<_>>(),
        [CategoryKey::Media]
    );
    assert_eq!(star.search_terms, ["favorite"]);

    let query = Query::new().search("favorite");
    assert_eq!(names(catalog.query(&query)), ["star.fill"]);
    Ok(())
}

#[test]
fn every_symbol_has_a_registered_category() -> Result<()> {
    let catalog = bundled()?;
    assert!(!catalog.is_empty());
    let registry: BTreeSet<_> = CategoryKey::ALL.iter().copied().collect();
    for symbol in catalog.iter() {
        assert!(!symbol.name.is_empty());
        assert!(!symbol.categories.is_empty(), "{} has no categories", symbol.name);
        for key in symbol.category_keys() {
            assert!(registry.contains(&key));
        }
    }
    Ok(())
}

#[test]
fn symbols_without_category_entries_are_uncategorized() -> Result<()> {
    let catalog = bundled()?;
    let symbol = catalog.get("cursorarrow.rays").expect("fixture symbol");
    assert_eq!(
        symbol.category_keys().collect::<Vec<_>>(),
        [CategoryKey::Uncategorized]
    );
    // 2025 has no release table in the bundled data.
    assert!(symbol.os_versions.is_empty());
    Ok(())
}

#[test]
fn identity_query_is_load_order_and_repeatable() -> Result<()> {
    let catalog = bundled()?;
    let query = Query::new();
    let all = names(catalog.iter());
    let first = names(catalog.query(&query));
    let second = names(catalog.query(&query));
    assert_eq!(first, all);
    assert_eq!(first, second);
    assert_eq!(first.first(), Some(&"square.and.arrow.up"));
    Ok(())
}

#[test]
fn category_restriction_narrows_results() -> Result<()> {
    let catalog = bundled()?;
    let base = Query::new().search("o");
    let unrestricted: BTreeSet<_> = names(catalog.query(&base)).into_iter().collect();
    let restricted = base.clone().limited_to([CategoryKey::Weather, CategoryKey::Shapes]);
    let narrowed = names(catalog.query(&restricted));
    assert!(!narrowed.is_empty());
    assert!(narrowed.len() < unrestricted.len());
    for name in &narrowed {
        assert!(unrestricted.contains(name));
        let symbol = catalog.get(name).unwrap();
        assert!(
            symbol.has_category(CategoryKey::Weather)
                || symbol.has_category(CategoryKey::Shapes)
        );
    }
    Ok(())
}

#[test]
fn search_matches_substrings_case_insensitively() -> Result<()> {
    let catalog = bundled()?;
    let plus = Query::new().search("PLUS");
    assert!(names(catalog.query(&plus)).contains(&"plus.circle.fill"));
    let joined = Query::new().search("pluscircle");
    assert!(catalog.query(&joined).next().is_none());

    let by_alias = Query::new().search("Turtle");
    assert_eq!(names(catalog.query(&by_alias)), ["tortoise"]);
    Ok(())
}

#[test]
fn selected_category_and_search_compose() -> Result<()> {
    let catalog = bundled()?;
    let query = Query::new()
        .selected(CategoryFilter::Only(CategoryKey::Health))
        .search("favorite");
    assert_eq!(names(catalog.query(&query)), ["heart", "heart.fill"]);
    Ok(())
}

#[test]
fn available_on_excludes_later_releases() -> Result<()> {
    let catalog = bundled()?;
    let ios14 = Query::new()
        .selected(CategoryKey::Fitness)
        .available_on(OsVersion::new("iOS", "14.0"));
    assert_eq!(names(catalog.query(&ios14)), ["figure.walk"]);

    let ios16 = Query::new()
        .selected(CategoryKey::Fitness)
        .available_on(OsVersion::new("iOS", "16.0"));
    assert_eq!(
        names(catalog.query(&ios16)),
        ["figure.run", "figure.walk", "dumbbell"]
    );
    Ok(())
}

#[test]
fn available_categories_only_lists_used_categories() -> Result<()> {
    let fixture = FixtureData::write(
        &json!({"symbols": {"a": "1", "b": "1"}, "year_to_release": {}}),
        Some(&json!({"a": ["weather"], "b": ["arrows", "weather"]})),
        None,
    )?;
    let catalog = load_dir(fixture.path())?;
    let keys: Vec<_> = catalog
        .available_categories(&BTreeSet::new())
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(keys, [CategoryKey::Arrows, CategoryKey::Weather]);
    assert!(!keys.contains(&CategoryKey::Uncategorized));

    let bundled = bundled()?;
    let keys: Vec<_> = bundled
        .available_categories(&BTreeSet::new())
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(keys.first(), Some(&CategoryKey::Uncategorized));
    Ok(())
}

#[test]
fn unknown_keys_beside_known_ones_do_not_surface_uncategorized() -> Result<()> {
    let fixture = FixtureData::write(
        &json!({"symbols": {"cloud.bolt": "2019"}, "year_to_release": {}}),
        Some(&json!({"cloud.bolt": ["unknownkey", "weather"]})),
        None,
    )?;
    let catalog = load_dir(fixture.path())?;
    let symbol = catalog.get("cloud.bolt").expect("cloud.bolt loaded");
    assert_eq!(
        symbol.category_keys().collect::<Vec<_>>(),
        [CategoryKey::Weather]
    );
    let keys: Vec<_> = catalog
        .available_categories(&BTreeSet::new())
        .into_iter()
        .map(|c| c.key)
        .collect();
    assert_eq!(keys, [CategoryKey::Weather]);
    assert!(!keys.contains(&CategoryKey::Uncategorized));
    Ok(())
}

#[test]
fn missing_optional_sources_are_empty() -> Result<()> {
    let fixture = FixtureData::write(
        &json!({"symbols": {"a": "2020"}, "year_to_release": {"2020": {"iOS": "14.0"}}}),
        None,
        None,
    )?;
    let catalog = load_dir(fixture.path())?;
    let a = catalog.get("a").unwrap();
    assert_eq!(a.category_keys().collect::<Vec<_>>(), [CategoryKey::Uncategorized]);
    assert!(a.search_terms.is_empty());
    Ok(())
}

#[test]
fn malformed_sources_abort_loading() -> Result<()> {
    let fixture = star_fixture()?;
    fixture.overwrite(SEARCH_TERMS_FILE, r#"{"star.fill": "favorite"}"#)?;
    let err = load_dir(fixture.path()).unwrap_err();
    assert_eq!(err.kind(), SourceKind::SearchTerms);
    assert!(matches!(err, MalformedCatalogError::Parse { path: Some(_), .. }));

    let fixture = star_fixture()?;
    fixture.overwrite(CATEGORIES_FILE, "[1, 2, 3]")?;
    let err = load_dir(fixture.path()).unwrap_err();
    assert_eq!(err.kind(), SourceKind::Categories);
    Ok(())
}

#[test]
fn missing_availability_is_an_io_error() {
    let empty = tempfile::TempDir::new().unwrap();
    let err = load_dir(empty.path()).unwrap_err();
    assert_eq!(err.kind(), SourceKind::Availability);
    assert!(matches!(err, MalformedCatalogError::Io { .. }));
    assert!(err.to_string().contains("name_availability.json"));
}
