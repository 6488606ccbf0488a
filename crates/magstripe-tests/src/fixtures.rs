//! Golden swipe fixtures loaded from `golden/swipes.json`.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use magstripe_track::CardFields;

/// A swipe together with everything expected of it after parsing and
/// validation.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSwipe {
    pub name: String,
    pub track_data: String,
    pub track1: String,
    pub track2: String,
    pub fields: CardFields,
    pub month: Option<String>,
    pub year: Option<String>,
    pub valid: bool,
    pub minimally_valid: bool,
    /// Expected error map, `{ "<field>": ["<message>", ...] }`.
    pub errors: serde_json::Value,
}

/// The full set of golden swipes.
pub struct GoldenFixtures {
    pub swipes: Vec<GoldenSwipe>,
}

impl GoldenFixtures {
    /// Path to the golden fixture file.
    pub fn path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("golden")
            .join("swipes.json")
    }

    /// Load all golden swipes.
    pub fn load() -> Self {
        let path = Self::path();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let swipes = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        Self { swipes }
    }

    /// Look up a swipe by name.
    pub fn swipe(&self, name: &str) -> &GoldenSwipe {
        self.swipes
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("No golden swipe named '{}'", name))
    }
}
