//! Load-time failure for symbol metadata.
//!
//! Loading has exactly one fatal outcome: a raw source that cannot be read or
//! parsed into its expected shape. Sparse data (unknown category keys, missing
//! per-symbol entries, missing year tables) is never an error.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the three raw sources a failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Availability,
    Categories,
    SearchTerms,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Availability => "availability",
            SourceKind::Categories => "categories",
            SourceKind::SearchTerms => "search terms",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum MalformedCatalogError {
    #[error("reading {kind} source {}", display_path(.path))]
    Io {
        kind: SourceKind,
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {kind} source {}", display_path(.path))]
    Parse {
        kind: SourceKind,
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {kind} source: {reason}")]
    Invalid { kind: SourceKind, reason: String },
}

impl MalformedCatalogError {
    /// The raw source the failure is attributed to.
    pub fn kind(&self) -> SourceKind {
        match self {
            MalformedCatalogError::Io { kind, .. }
            | MalformedCatalogError::Parse { kind, .. }
            | MalformedCatalogError::Invalid { kind, .. } => *kind,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<inline>".to_string(),
    }
}
