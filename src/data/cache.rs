use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::PRINT_CACHE_EVENTS;
use crate::config::{CACHE_ACCEPTABLE_AGE_SECS, CACHE_DIR, CACHE_VERSION, price_cache_filename};
use crate::domain::{ComparisonMode, PricePoint, Timeframe};
use crate::utils::time_utils::{how_many_seconds_ago, now_timestamp_ms};

use super::provider::{MarketDataProvider, PrimaryFetch};

/// Serialized cache wrapper for one timeframe's primary fetch.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub timeframe: Timeframe,
    pub data: PrimaryFetch,
}

impl CacheFile {
    pub fn new(timeframe: Timeframe, data: PrimaryFetch) -> Self {
        Self {
            version: CACHE_VERSION,
            timestamp_ms: now_timestamp_ms(),
            timeframe,
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }

    /// Version, timeframe and recency gates. Anything off means refetch.
    pub fn check_validity(&self, timeframe: Timeframe, max_age_secs: i64) -> Result<()> {
        if self.version != CACHE_VERSION {
            bail!(
                "Cache version mismatch: file v{} vs required v{}",
                self.version,
                CACHE_VERSION
            );
        }

        if self.timeframe != timeframe {
            bail!(
                "Cache timeframe mismatch: file has {}, expected {}",
                self.timeframe,
                timeframe
            );
        }

        let seconds_ago = how_many_seconds_ago(self.timestamp_ms);
        if seconds_ago > max_age_secs {
            bail!(
                "Cache too old: created {} seconds ago (limit: {} seconds)",
                seconds_ago,
                max_age_secs
            );
        }

        Ok(())
    }
}

/// Serves a fresh-enough cached series before asking the inner provider, and
/// writes successful fetches back for the next run.
///
/// Comparison fetches pass straight through — best-effort overlay data is not
/// worth a disk round-trip.
pub struct CachedProvider {
    inner: Arc<dyn MarketDataProvider>,
    cache_dir: PathBuf,
    max_age_secs: i64,
}

impl CachedProvider {
    pub fn new(inner: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_cache_dir(inner, PathBuf::from(CACHE_DIR), CACHE_ACCEPTABLE_AGE_SECS)
    }

    pub fn with_cache_dir(
        inner: Arc<dyn MarketDataProvider>,
        cache_dir: PathBuf,
        max_age_secs: i64,
    ) -> Self {
        Self {
            inner,
            cache_dir,
            max_age_secs,
        }
    }

    fn cache_path(&self, timeframe: Timeframe) -> PathBuf {
        self.cache_dir.join(price_cache_filename(timeframe))
    }

    fn load_valid(&self, timeframe: Timeframe) -> Result<PrimaryFetch> {
        let cache = CacheFile::load_from_path(&self.cache_path(timeframe))?;
        cache.check_validity(timeframe, self.max_age_secs)?;
        Ok(cache.data)
    }
}

#[async_trait]
impl MarketDataProvider for CachedProvider {
    async fn fetch_primary(&self, timeframe: Timeframe) -> Result<PrimaryFetch> {
        match self.load_valid(timeframe) {
            Ok(data) => {
                #[cfg(debug_assertions)]
                if PRINT_CACHE_EVENTS {
                    log::info!("Serving {} from local cache ({} points)", timeframe, data.series.len());
                }
                Ok(data)
            }
            Err(e) => {
                log::info!("Local cache unusable for {}: {:#}", timeframe, e);

                let fetched = self.inner.fetch_primary(timeframe).await?;
                if let Err(write_err) =
                    CacheFile::new(timeframe, fetched.clone()).save_to_path(&self.cache_path(timeframe))
                {
                    log::warn!("Failed to write price cache: {:#}", write_err);
                }
                Ok(fetched)
            }
        }
    }

    async fn fetch_comparison(
        &self,
        timeframe: Timeframe,
        mode: ComparisonMode,
        reference: &[PricePoint],
    ) -> Result<Vec<PricePoint>> {
        self.inner.fetch_comparison(timeframe, mode, reference).await
    }

    fn signature(&self) -> &'static str {
        "Cache-backed feed"
    }
}
