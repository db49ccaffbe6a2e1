//! Time-to-live card cache.
//!
//! Persists the sanitized card list to a single JSON file and rebuilds it
//! from a [`CardSource`] whenever the file is missing or older than the
//! freshness window. Freshness is judged by the file's modification time.

use crate::bulk::CardSource;
use crate::config;
use crate::error::{ArtbotError, Result};
use crate::models::SanitizedCard;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Owns the on-disk card cache file.
pub struct CardCache {
    /// Path of the cache file.
    pub path: PathBuf,
    /// Maximum age before the cache is rebuilt.
    pub ttl: Duration,
    /// If true, every [`get_cards`](CardCache::get_cards) call refreshes.
    pub always_refresh: bool,
}

impl CardCache {
    /// Create a cache storing `cards.json` in `cache_dir`.
    ///
    /// Creates the directory if it does not exist.
    pub fn new(cache_dir: &Path, always_refresh: bool) -> Result<Self> {
        fs::create_dir_all(cache_dir)?;
        Ok(Self {
            path: cache_dir.join(config::CACHE_FILE),
            ttl: config::CACHE_TTL,
            always_refresh,
        })
    }

    /// Override the freshness window.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Deserialize the cached card list.
    pub fn read_cached_cards(&self) -> Result<Vec<SanitizedCard>> {
        let file = fs::File::open(&self.path)
            .map_err(|e| ArtbotError::CacheRead(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ArtbotError::CacheRead(format!("{}: {}", self.path.display(), e)))
    }

    /// Replace the cache file with `cards`.
    ///
    /// Writes to a temp file in the same directory first and renames it over
    /// the target, so readers never observe a partial file.
    pub fn write_cache(&self, cards: &[SanitizedCard]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer(&mut writer, cards)?;
            writer.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;
        tracing::info!(path = %self.path.display(), cards = cards.len(), "card cache written");
        Ok(())
    }

    /// Whether the cache file exists and is younger than the TTL.
    pub fn is_fresh(&self) -> bool {
        match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(modified) => is_fresh(modified, SystemTime::now(), self.ttl),
            Err(_) => false,
        }
    }

    /// Return the cached cards, refreshing from `source` when needed.
    ///
    /// Refreshes when the policy forces it, the file is missing, or the file
    /// is stale. A fresh file that cannot be parsed is a
    /// [`ArtbotError::CacheRead`] error.
    pub fn get_cards(&self, source: &dyn CardSource) -> Result<Vec<SanitizedCard>> {
        if !self.always_refresh && self.is_fresh() {
            let cards = self.read_cached_cards()?;
            tracing::info!(cards = cards.len(), "using cached card data");
            return Ok(cards);
        }
        self.refresh(source)
    }

    /// Rebuild the cache from `source` unconditionally.
    pub fn refresh(&self, source: &dyn CardSource) -> Result<Vec<SanitizedCard>> {
        tracing::info!(path = %self.path.display(), "refreshing card cache");
        let cards = source.fetch_cards()?;
        self.write_cache(&cards)?;
        Ok(cards)
    }

    /// Remove the cache file, if present.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// A file last modified at `modified` is fresh at `now` if it is younger
/// than `ttl`. Modification times in the future count as age zero.
pub fn is_fresh(modified: SystemTime, now: SystemTime, ttl: Duration) -> bool {
    let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
    age < ttl
}
