use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// RawRecord — one card object from the upstream oracle bulk file
// ---------------------------------------------------------------------------

/// A card exactly as the bulk dataset supplies it.
///
/// The upstream schema varies by layout (multi-faced cards carry no
/// top-level `image_uris`, tokens lack a mana cost, ...), so every field is
/// optional or defaulted and deserializing a record never fails on a
/// missing key. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: String,
    pub mana_cost: Option<String>,
    pub image_uris: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub type_line: String,
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub legalities: BTreeMap<String, String>,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub rarity: String,
    pub flavor_text: Option<String>,
    pub artist: Option<String>,
}
