use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Minimum platform release on which a symbol is available, e.g. `iOS 13.0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OsVersion {
    pub platform: String,
    pub version: String,
}

impl OsVersion {
    pub fn new(platform: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            version: version.into(),
        }
    }

    pub fn same_platform(&self, other: &OsVersion) -> bool {
        self.platform.eq_ignore_ascii_case(&other.platform)
    }

    /// True when this release ships no later than `target` on the same platform.
    pub fn available_by(&self, target: &OsVersion) -> bool {
        self.same_platform(target)
            && compare_versions(&self.version, &target.version) != Ordering::Greater
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.platform, self.version)
    }
}

impl Serialize for OsVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for OsVersion {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(platform), Some(version), None) => Ok(OsVersion::new(platform, version)),
            _ => Err(format!(
                "expected '<platform> <version>' (for example 'iOS 17.0'), got '{raw}'"
            )),
        }
    }
}

/// Compare dotted versions numerically; missing or non-numeric parts count as 0.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let parse = |raw: &str| -> Vec<u64> {
        raw.split('.')
            .map(|part| part.trim().parse().unwrap_or(0))
            .collect()
    };
    let (left, right) = (parse(left), parse(right));
    let len = left.len().max(right.len());
    for idx in 0..len {
        let l = left.get(idx).copied().unwrap_or(0);
        let r = right.get(idx).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
