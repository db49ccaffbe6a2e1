//! MTG art bot.
//!
//! Picks a random Magic: The Gathering card from the Scryfall oracle-cards
//! bulk dataset and posts its art crop with the card's flavor text. The
//! sanitized dataset is cached locally and rebuilt every 12 hours.
//!
//! # Quick start
//!
//! ```no_run
//! use mtg_artbot::publish::{Credentials, TwitterPublisher};
//! use mtg_artbot::Artbot;
//!
//! let bot = Artbot::builder().build().unwrap();
//! let publisher = TwitterPublisher::new(bot.http_client(), Credentials::from_env().unwrap());
//! let posted = bot.post(&publisher).unwrap();
//! println!("{}", posted.caption);
//! ```

pub mod artwork;
pub mod bulk;
pub mod cache;
pub mod caption;
pub mod config;
pub mod error;
pub mod models;
pub mod publish;
pub mod sanitize;

pub use artwork::ArtworkFetcher;
pub use bulk::{BulkDataClient, CardSource};
pub use cache::CardCache;
pub use caption::PostedCard;
pub use error::{ArtbotError, Result};
pub use models::SanitizedCard;

use publish::Publisher;
use reqwest::blocking::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// ArtbotBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`Artbot`].
pub struct ArtbotBuilder {
    cache_dir: Option<PathBuf>,
    always_refresh: bool,
    timeout: Option<Duration>,
    bulk_data_url: String,
    max_caption_len: usize,
}

impl Default for ArtbotBuilder {
    fn default() -> Self {
        Self {
            cache_dir: None,
            always_refresh: false,
            timeout: None,
            bulk_data_url: config::BULK_DATA_URL.to_string(),
            max_caption_len: config::MAX_CAPTION_LEN,
        }
    }
}

impl ArtbotBuilder {
    /// Directory holding the card cache and the downloaded artwork.
    ///
    /// Defaults to the platform cache directory (e.g. `~/.cache/mtg-artbot`
    /// on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Ignore the cache and download the dataset on every run.
    ///
    /// Defaults to `false`.
    pub fn always_refresh(mut self, always_refresh: bool) -> Self {
        self.always_refresh = always_refresh;
        self
    }

    /// Set a total deadline for each HTTP request, body included.
    ///
    /// Defaults to no deadline, so the bulk dataset download may take as long
    /// as the link needs.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the bulk-data discovery endpoint.
    pub fn bulk_data_url(mut self, url: impl Into<String>) -> Self {
        self.bulk_data_url = url.into();
        self
    }

    /// Maximum caption length in characters. Defaults to 280.
    pub fn max_caption_len(mut self, max_len: usize) -> Self {
        self.max_caption_len = max_len;
        self
    }

    /// Build the bot, creating the cache directory and HTTP client.
    ///
    /// No network requests are made until cards are requested.
    pub fn build(self) -> Result<Artbot> {
        let dir = self.cache_dir.unwrap_or_else(config::default_cache_dir);

        // `None` disables the blocking client's built-in 30 s deadline.
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config::USER_AGENT)
            .build()?;

        let cache = CardCache::new(&dir, self.always_refresh)?;
        Ok(Artbot {
            bulk: BulkDataClient::new(client.clone(), self.bulk_data_url),
            artwork: ArtworkFetcher::new(client.clone(), &dir),
            cache,
            client,
            max_caption_len: self.max_caption_len,
        })
    }
}

// ---------------------------------------------------------------------------
// Artbot
// ---------------------------------------------------------------------------

/// Ties the dataset client, card cache and artwork fetcher together.
///
/// Created via [`Artbot::builder()`].
pub struct Artbot {
    bulk: BulkDataClient,
    cache: CardCache,
    artwork: ArtworkFetcher,
    client: Client,
    max_caption_len: usize,
}

impl Artbot {
    pub fn builder() -> ArtbotBuilder {
        ArtbotBuilder::default()
    }

    /// The shared HTTP client, for constructing a publisher.
    pub fn http_client(&self) -> Client {
        self.client.clone()
    }

    pub fn cache(&self) -> &CardCache {
        &self.cache
    }

    pub fn bulk(&self) -> &BulkDataClient {
        &self.bulk
    }

    pub fn artwork(&self) -> &ArtworkFetcher {
        &self.artwork
    }

    /// Sanitized cards, from the cache when fresh.
    pub fn cards(&self) -> Result<Vec<SanitizedCard>> {
        self.cache.get_cards(&self.bulk)
    }

    /// Download the dataset and rewrite the cache regardless of its age.
    pub fn refresh(&self) -> Result<Vec<SanitizedCard>> {
        self.cache.refresh(&self.bulk)
    }

    /// Choose a card with a fitting caption from the current card pool.
    pub fn select(&self) -> Result<PostedCard> {
        let cards = self.cards()?;
        caption::select_post(&cards, self.max_caption_len, &mut rand::thread_rng())
    }

    /// Select a card, download its artwork, and publish it.
    pub fn post(&self, publisher: &dyn Publisher) -> Result<PostedCard> {
        let posted = self.select()?;
        let image = self.artwork.fetch_artwork(&posted.card)?;
        publisher.publish_image_post(&image, &posted.caption)?;
        tracing::info!(card = %posted.card.name, "post published");
        Ok(posted)
    }
}

impl fmt::Display for Artbot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Artbot(cache={}, always_refresh={}, max_caption_len={})",
            self.cache.path.display(),
            self.cache.always_refresh,
            self.max_caption_len
        )
    }
}
