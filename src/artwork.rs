//! Downloads a card's art crop to a fixed local path.

use crate::config;
use crate::error::{ArtbotError, Result};
use crate::models::SanitizedCard;
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};

/// Fetches artwork into a single file that each download overwrites.
pub struct ArtworkFetcher {
    client: Client,
    path: PathBuf,
}

impl ArtworkFetcher {
    /// Create a fetcher writing `image.jpg` in `dir`.
    pub fn new(client: Client, dir: &Path) -> Self {
        Self {
            client,
            path: dir.join(config::ARTWORK_FILE),
        }
    }

    /// Local path the artwork is written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Download the art crop of `card`, returning the local file path.
    ///
    /// Fails with [`ArtbotError::NoArtwork`] before any request is made if the
    /// card has no art crop image.
    pub fn fetch_artwork(&self, card: &SanitizedCard) -> Result<PathBuf> {
        let uri = card
            .image(config::ART_CROP)
            .ok_or_else(|| ArtbotError::NoArtwork(card.name.clone()))?;

        tracing::info!(card = %card.name, %uri, "downloading artwork");
        let resp = self.client.get(uri).send()?.error_for_status()?;
        let bytes = resp.bytes()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &bytes)?;
        Ok(self.path.clone())
    }
}
