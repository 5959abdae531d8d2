use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ComparisonMode, PricePoint, Timeframe};

/// Where a primary fetch says its numbers came from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Everything a primary fetch returns: the series plus its provenance.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PrimaryFetch {
    pub series: Vec<PricePoint>,
    pub sources: Vec<GroundingSource>,
}

/// The injected market-data capability.
///
/// The engine owns one of these behind an `Arc`; there is no app-level client
/// singleton. Implementations must return series date-ascending. An empty
/// primary series is a legitimate answer, not an error.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// OHLC series for the tracked instrument over `timeframe`.
    async fn fetch_primary(&self, timeframe: Timeframe) -> Result<PrimaryFetch>;

    /// Comparison closes aligned to a subset of the `reference` dates.
    /// Never invoked with `ComparisonMode::None`.
    async fn fetch_comparison(
        &self,
        timeframe: Timeframe,
        mode: ComparisonMode,
        reference: &[PricePoint],
    ) -> Result<Vec<PricePoint>>;

    /// A unique identifier for this implementation (so that afterwards we
    /// know which source actually served the data).
    fn signature(&self) -> &'static str;
}
