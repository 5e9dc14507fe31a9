//! Category registry.
//!
//! The set of category keys is closed and declared once here. Each key carries
//! a display label and an icon name; raw keys from metadata resolve through
//! [`resolve`], which never fails and falls back to
//! [`CategoryKey::Uncategorized`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! categories {
    ($($variant:ident => ($key:literal, $label:literal, $icon:literal)),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum CategoryKey {
            $($variant),+
        }

        impl CategoryKey {
            /// Every key in declaration order.
            pub const ALL: &'static [CategoryKey] = &[$(CategoryKey::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(CategoryKey::$variant => $key),+
                }
            }

            pub fn category(&self) -> Category {
                match self {
                    $(CategoryKey::$variant => Category {
                        key: CategoryKey::$variant,
                        label: $label,
                        icon: $icon,
                    }),+
                }
            }
        }

        impl FromStr for CategoryKey {
            type Err = UnknownCategory;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($key => Ok(CategoryKey::$variant),)+
                    other => Err(UnknownCategory(other.to_string())),
                }
            }
        }
    };
}

categories! {
    Uncategorized => ("uncategorized", "Uncategorized", "questionmark.circle"),
    Accessibility => ("accessibility", "Accessibility", "figure.arms.open"),
    Arrows => ("arrows", "Arrows", "arrow.forward"),
    Automotive => ("automotive", "Automotive", "car.side"),
    CameraAndPhotos => ("cameraandphotos", "Camera & Photos", "camera"),
    Commerce => ("commerce", "Commerce", "cart"),
    Communication => ("communication", "Communication", "message"),
    Connectivity => ("connectivity", "Connectivity", "antenna.radiowaves.left.and.right"),
    Devices => ("devices", "Devices", "desktopcomputer"),
    Editing => ("editing", "Editing", "slider.horizontal.3"),
    Fitness => ("fitness", "Fitness", "figure.run"),
    Gaming => ("gaming", "Gaming", "gamecontroller"),
    Health => ("health", "Health", "heart"),
    Home => ("home", "Home", "house"),
    Human => ("human", "Human", "person.crop.circle"),
    Indices => ("indices", "Indices", "a.circle"),
    Keyboard => ("keyboard", "Keyboard", "command"),
    Maps => ("maps", "Maps", "map"),
    Math => ("math", "Math", "x.squareroot"),
    Media => ("media", "Media", "playpause"),
    Multicolor => ("multicolor", "Multicolor", "paintpalette"),
    Nature => ("nature", "Nature", "leaf"),
    ObjectsAndTools => ("objectsandtools", "Objects & Tools", "folder"),
    PrivacyAndSecurity => ("privacyandsecurity", "Privacy & Security", "lock"),
    Shapes => ("shapes", "Shapes", "square.on.circle"),
    TextFormatting => ("textformatting", "Text Formatting", "textformat"),
    Time => ("time", "Time", "timer"),
    Transportation => ("transportation", "Transportation", "car"),
    VariableColor => ("variablecolor", "Variable Color", "slider.horizontal.below.square.and.square.filled"),
    Weather => ("weather", "Weather", "cloud.sun"),
    WhatsNew => ("whatsnew", "What's New", "sparkles"),
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Raw key that does not name a known category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// A category with its display metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    pub key: CategoryKey,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Category {
    pub fn uncategorized() -> Self {
        CategoryKey::Uncategorized.category()
    }
}

/// Resolve a raw key string; unknown keys map to `uncategorized`.
pub fn resolve(raw: &str) -> Category {
    raw.parse::<CategoryKey>()
        .unwrap_or(CategoryKey::Uncategorized)
        .category()
}

/// All known categories in declaration order.
pub fn list() -> impl Iterator<Item = Category> {
    CategoryKey::ALL.iter().map(CategoryKey::category)
}

/// The selected-category control: every category, or exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    pub fn admits(&self, key: CategoryKey) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == key,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        raw.parse().map(CategoryFilter::Only)
    }
}

impl From<CategoryKey> for CategoryFilter {
    fn from(key: CategoryKey) -> Self {
        CategoryFilter::Only(key)
    }
}
