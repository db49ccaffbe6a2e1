//! Shared fixtures for the art bot integration tests.
//!
//! Raw-record builders shaped like Scryfall oracle-card objects, a stub
//! [`CardSource`], and helpers for mounting a fake bulk-data API on a
//! `wiremock` server.

#![allow(dead_code)]

use mtg_artbot::{CardSource, Result, SanitizedCard};
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A raw oracle-card record as the bulk file serves it.
pub fn raw_card(name: &str, set_name: &str, flavor: Option<&str>) -> Value {
    let mut card = json!({
        "object": "card",
        "id": format!("id-{}", name),
        "lang": "en",
        "name": name,
        "mana_cost": "{2}{G}",
        "cmc": 3.0,
        "type_line": "Creature \u{2014} Elf Druid",
        "oracle_text": "{T}: Add {G}.",
        "colors": ["G"],
        "color_identity": ["G"],
        "keywords": [],
        "legalities": {
            "standard": "not_legal",
            "modern": "legal",
            "legacy": "legal",
            "vintage": "restricted"
        },
        "set": "lea",
        "set_name": set_name,
        "rarity": "common",
        "artist": "Anson Maddocks",
        "image_uris": {
            "small": "https://cards.example/small.jpg",
            "art_crop": "https://cards.example/art_crop.jpg"
        }
    });
    if let Some(flavor) = flavor {
        card["flavor_text"] = json!(flavor);
    }
    card
}

/// 500 records: 10 without flavor text, 5 from joke sets, 485 postable.
pub fn dataset_500() -> Vec<Value> {
    let joke_sets = ["Unglued", "Unhinged", "Unstable", "Unsanctioned", "Unhinged"];
    (0..500)
        .map(|i| {
            let name = format!("Card {}", i);
            if i < 10 {
                raw_card(&name, "Alpha", None)
            } else if i < 15 {
                raw_card(&name, joke_sets[i - 10], Some("Ha."))
            } else {
                raw_card(&name, "Alpha", Some("Flavor."))
            }
        })
        .collect()
}

/// A sanitized card with a short caption.
pub fn sample_card(name: &str, art_crop: Option<&str>) -> SanitizedCard {
    let mut images = BTreeMap::new();
    if let Some(url) = art_crop {
        images.insert("art_crop".to_string(), url.to_string());
    }
    SanitizedCard {
        name: name.to_string(),
        cost: "{G}".to_string(),
        images,
        mana_value: 1.0,
        type_line: "Creature - Elf".to_string(),
        colors: BTreeSet::from(["G".to_string()]),
        color_identity: BTreeSet::from(["G".to_string()]),
        oracle_text: "{T}: Add {G}.".to_string(),
        legal_formats: BTreeSet::from(["legacy".to_string()]),
        set_code: "lea".to_string(),
        set_name: "Limited Edition Alpha".to_string(),
        keywords: Vec::new(),
        rarity: "common".to_string(),
        flavor_text: "Birds of a feather.".to_string(),
        artist: Some("Mark Poole".to_string()),
    }
}

/// A [`CardSource`] returning fixed cards and counting calls.
pub struct StubSource {
    pub cards: Vec<SanitizedCard>,
    pub calls: Cell<usize>,
}

impl StubSource {
    pub fn new(cards: Vec<SanitizedCard>) -> Self {
        Self {
            cards,
            calls: Cell::new(0),
        }
    }
}

impl CardSource for StubSource {
    fn fetch_cards(&self) -> Result<Vec<SanitizedCard>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.cards.clone())
    }
}

pub fn http_client() -> Client {
    Client::builder().build().unwrap()
}

/// Mount `/bulk-data` listing an `oracle_cards` entry that points at
/// `/oracle-cards.json`, which serves `records`.
pub async fn mount_bulk_api(server: &MockServer, records: Vec<Value>) {
    let index = json!({
        "object": "list",
        "has_more": false,
        "data": [
            {
                "object": "bulk_data",
                "type": "default_cards",
                "name": "Default Cards",
                "download_uri": format!("{}/default-cards.json", server.uri())
            },
            {
                "object": "bulk_data",
                "type": "oracle_cards",
                "name": "Oracle Cards",
                "download_uri": format!("{}/oracle-cards.json", server.uri())
            }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/bulk-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oracle-cards.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(records)))
        .mount(server)
        .await;
}
