use std::path::PathBuf;
use std::time::Duration;

pub const BULK_DATA_URL: &str = "https://api.scryfall.com/bulk-data";
pub const BULK_DATA_TYPE: &str = "oracle_cards";

pub const MEDIA_UPLOAD_URL: &str = "https://upload.twitter.com/1.1/media/upload.json";
pub const CREATE_POST_URL: &str = "https://api.twitter.com/2/tweets";

pub const USER_AGENT: &str = concat!("mtg-artbot/", env!("CARGO_PKG_VERSION"));

pub const CACHE_FILE: &str = "cards.json";
pub const ARTWORK_FILE: &str = "image.jpg";

/// Age at which the card cache must be rebuilt from the bulk data.
pub const CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

pub const MAX_CAPTION_LEN: usize = 280;
pub const HASHTAGS: &str = "#MTG #MagicTheGathering #MTGA #MTGArena";

/// Image variant posted for each card.
pub const ART_CROP: &str = "art_crop";

/// Set-name fragments of the joke ("Un-") sets, never posted.
pub const JOKE_SETS: [&str; 4] = ["Unglued", "Unhinged", "Unstable", "Unsanctioned"];

pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_API_SECRET: &str = "API_SECRET";
pub const ENV_ACCESS_KEY: &str = "ACCESS_KEY";
pub const ENV_ACCESS_SECRET: &str = "ACCESS_SECRET";

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("mtg-artbot")
    } else {
        PathBuf::from(".mtg-artbot-cache")
    }
}
