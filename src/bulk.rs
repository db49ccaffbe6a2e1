//! Bulk dataset client.
//!
//! Resolves the current download location of the oracle-cards bulk file via
//! the discovery endpoint, downloads it, and sanitizes the records.

use crate::config;
use crate::error::{ArtbotError, Result};
use crate::models::{BulkDataIndex, RawRecord, SanitizedCard};
use crate::sanitize;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;

/// Anything that can produce a fresh set of sanitized cards.
///
/// The card cache refreshes through this trait, so tests can substitute a
/// source that never touches the network.
pub trait CardSource {
    fn fetch_cards(&self) -> Result<Vec<SanitizedCard>>;
}

/// Downloads the oracle-cards bulk dataset.
pub struct BulkDataClient {
    client: Client,
    index_url: String,
    data_type: String,
}

impl BulkDataClient {
    /// Create a client querying the given discovery endpoint.
    pub fn new(client: Client, index_url: impl Into<String>) -> Self {
        Self {
            client,
            index_url: index_url.into(),
            data_type: config::BULK_DATA_TYPE.to_string(),
        }
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url).header(ACCEPT, "application/json")
    }

    /// Query the discovery endpoint for the current dataset download URL.
    pub fn resolve_download_url(&self) -> Result<String> {
        tracing::info!(url = %self.index_url, "fetching bulk data index");
        let resp = self
            .get(&self.index_url)
            .send()
            .map_err(|e| ArtbotError::Discovery(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ArtbotError::Discovery(format!(
                "{} returned {}",
                self.index_url, status
            )));
        }
        let index: BulkDataIndex = resp
            .json()
            .map_err(|e| ArtbotError::Discovery(e.to_string()))?;

        index
            .find(&self.data_type)
            .and_then(|d| d.download_uri.clone())
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| ArtbotError::NoDownloadLink(self.data_type.clone()))
    }

    /// Download the dataset at `url` and parse its top-level array.
    pub fn fetch_raw_records(&self, url: &str) -> Result<Vec<RawRecord>> {
        tracing::info!(%url, "downloading bulk card data");
        let resp = self
            .get(url)
            .send()
            .map_err(|e| ArtbotError::Download(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ArtbotError::Download(format!("{} returned {}", url, status)));
        }
        let records: Vec<RawRecord> = resp.json()?;
        tracing::info!(records = records.len(), "bulk card data downloaded");
        Ok(records)
    }

    /// Resolve, download and sanitize the current dataset.
    pub fn download(&self) -> Result<Vec<SanitizedCard>> {
        let url = self.resolve_download_url()?;
        let records = self.fetch_raw_records(&url)?;
        Ok(sanitize::sanitize_all(records))
    }
}

impl CardSource for BulkDataClient {
    fn fetch_cards(&self) -> Result<Vec<SanitizedCard>> {
        self.download()
    }
}
