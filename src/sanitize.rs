//! Reduces raw bulk-data records to the display-ready [`SanitizedCard`] shape.
//!
//! Joke-set cards and cards without flavor text are dropped; every other
//! record maps totally, with defaults for absent optional fields.

use crate::config;
use crate::models::{RawRecord, SanitizedCard};

const EM_DASH: char = '\u{2014}';
const BULLET: char = '\u{2022}';

/// Legality value marking a format the card cannot be played in.
const NOT_LEGAL: &str = "not_legal";

/// Sanitize every record, discarding the ones that are filtered out.
pub fn sanitize_all(records: Vec<RawRecord>) -> Vec<SanitizedCard> {
    let total = records.len();
    let cards: Vec<SanitizedCard> = records.into_iter().filter_map(sanitize_one).collect();
    tracing::debug!(
        total,
        kept = cards.len(),
        dropped = total - cards.len(),
        "sanitized bulk records"
    );
    cards
}

/// Sanitize a single record, returning `None` if it should not be posted.
pub fn sanitize_one(record: RawRecord) -> Option<SanitizedCard> {
    if is_joke_set(&record.set_name) {
        return None;
    }
    let flavor_text = record.flavor_text.filter(|f| !f.is_empty())?;

    // "banned" and "restricted" count as legal formats here.
    let legal_formats = record
        .legalities
        .into_iter()
        .filter(|(_, status)| status != NOT_LEGAL)
        .map(|(format, _)| format)
        .collect();

    Some(SanitizedCard {
        name: record.name,
        cost: record.mana_cost.unwrap_or_default(),
        images: record.image_uris.unwrap_or_default(),
        mana_value: record.cmc,
        type_line: normalize_dashes(&record.type_line),
        colors: record.colors.unwrap_or_default().into_iter().collect(),
        color_identity: record.color_identity.into_iter().collect(),
        oracle_text: record
            .oracle_text
            .as_deref()
            .map(normalize_rules_text)
            .unwrap_or_default(),
        legal_formats,
        set_code: record.set,
        set_name: record.set_name,
        keywords: record.keywords,
        rarity: record.rarity,
        flavor_text,
        artist: record.artist.filter(|a| !a.is_empty()),
    })
}

/// Case-sensitive substring match against the joke-set denylist.
pub fn is_joke_set(set_name: &str) -> bool {
    config::JOKE_SETS.iter().any(|joke| set_name.contains(joke))
}

fn normalize_dashes(text: &str) -> String {
    text.replace(EM_DASH, "-")
}

fn normalize_rules_text(text: &str) -> String {
    normalize_dashes(text).replace(BULLET, "*")
}
