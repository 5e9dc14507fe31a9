#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use symbolpicker::{AVAILABILITY_FILE, CATEGORIES_FILE, SEARCH_TERMS_FILE, Symbol};
use tempfile::TempDir;

/// The metadata bundled with the crate.
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn symbol_query_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_symbol-query"))
}

// Writes the three source documents into a fresh temp dir; `None` leaves the
// file out entirely.
pub struct FixtureData {
    dir: TempDir,
}

impl FixtureData {
    pub fn write(
        availability: &Value,
        categories: Option<&Value>,
        search_terms: Option<&Value>,
    ) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fixture dir")?;
        write_json(&dir.path().join(AVAILABILITY_FILE), availability)?;
        if let Some(value) = categories {
            write_json(&dir.path().join(CATEGORIES_FILE), value)?;
        }
        if let Some(value) = search_terms {
            write_json(&dir.path().join(SEARCH_TERMS_FILE), value)?;
        }
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn overwrite(&self, file: &str, contents: &str) -> Result<()> {
        fs::write(self.dir.path().join(file), contents)
            .with_context(|| format!("failed to write fixture {file}"))
    }
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// The single-symbol catalog used by the end-to-end scenario.
pub fn star_fixture() -> Result<FixtureData> {
    FixtureData::write(
        &json!({
            "symbols": {"star.fill": "13"},
            "year_to_release": {"13": {"iOS": "13.0"}}
        }),
        Some(&json!({"star.fill": ["media"]})),
        Some(&json!({"star.fill": ["favorite"]})),
    )
}

pub fn names<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> Vec<&'a str> {
    symbols
        .into_iter()
        .map(|symbol| symbol.name.as_str())
        .collect()
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        anyhow::bail!(
            "command {:?} failed: {}\nstderr: {}",
            cmd.get_program(),
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
