use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// SanitizedCard — the display-ready shape persisted in the card cache
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedCard {
    pub name: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    pub mana_value: f64,
    pub type_line: String,
    #[serde(default)]
    pub colors: BTreeSet<String>,
    #[serde(default)]
    pub color_identity: BTreeSet<String>,
    #[serde(default)]
    pub oracle_text: String,
    #[serde(default)]
    pub legal_formats: BTreeSet<String>,
    pub set_code: String,
    pub set_name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub rarity: String,
    pub flavor_text: String,
    pub artist: Option<String>,
}

impl SanitizedCard {
    /// URL of the given image variant (e.g. `"art_crop"`), if present.
    pub fn image(&self, variant: &str) -> Option<&str> {
        self.images.get(variant).map(|s| s.as_str())
    }
}
