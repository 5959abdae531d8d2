use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, NaiveDate, NaiveDateTime};

use crate::config::MARKET;
use crate::domain::{ComparisonMode, PricePoint, Timeframe};
use crate::utils::time_utils::{DAILY_DATE_FORMAT, HOURLY_DATE_FORMAT};

use super::provider::{GroundingSource, MarketDataProvider, PrimaryFetch};

// All demo series end at this session close so repeated runs (and tests)
// see byte-identical data.
const ANCHOR_Y: i32 = 2025;
const ANCHOR_M: u32 = 6;
const ANCHOR_D: u32 = 30;
const ANCHOR_HOUR: u32 = 17;

/// Recent FCPO settlements hover around RM 4,000 per tonne.
const FCPO_BASE_PRICE: f64 = 3950.0;

/// Soybean oil futures trade around 47 US cents per pound.
const SBO_BASE_PRICE: f64 = 47.0;

/// Offline stand-in for the live market feed.
///
/// Generates a deterministic FCPO-like walk per timeframe (seeded LCG, no
/// network), plus deterministic comparison series aligned to a subset of the
/// reference dates. Optional latency mimics a real feed for interactive runs.
pub struct DemoProvider {
    latency: Duration,
}

impl DemoProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// No artificial latency — what the tests use.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(150))
    }
}

#[async_trait]
impl MarketDataProvider for DemoProvider {
    async fn fetch_primary(&self, timeframe: Timeframe) -> Result<PrimaryFetch> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let dates = demo_dates(timeframe);
        let series = build_series(&dates, primary_seed(timeframe), FCPO_BASE_PRICE, 0.0004, 0.011);

        Ok(PrimaryFetch {
            series,
            sources: demo_sources(),
        })
    }

    async fn fetch_comparison(
        &self,
        timeframe: Timeframe,
        mode: ComparisonMode,
        reference: &[PricePoint],
    ) -> Result<Vec<PricePoint>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        // Not invoked by the engine, but mirror the upstream service: an
        // inactive mode just answers with nothing.
        if !mode.is_active() {
            return Ok(Vec::new());
        }

        let base = match mode {
            ComparisonMode::PreviousPeriod => FCPO_BASE_PRICE * 0.97,
            _ => SBO_BASE_PRICE,
        };

        // Reuse the reference dates (the engine hands us the current primary
        // series) but leave occasional holes, like mismatched trading
        // calendars do.
        let dates: Vec<String> = reference
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 9 != 5)
            .map(|(_, p)| p.date.clone())
            .collect();

        Ok(build_series(
            &dates,
            primary_seed(timeframe) ^ comparison_seed(mode),
            base,
            0.0002,
            0.009,
        ))
    }

    fn signature(&self) -> &'static str {
        "Demo feed"
    }
}

/// Deterministic pseudo-random stream: LCG producing values in [-1, 1].
struct DemoRng(u64);

impl DemoRng {
    fn next_signed(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }
}

fn primary_seed(timeframe: Timeframe) -> u64 {
    match timeframe {
        Timeframe::OneDay => 11,
        Timeframe::OneWeek => 23,
        Timeframe::OneMonth => 42,
        Timeframe::SixMonths => 77,
        Timeframe::OneYear => 99,
    }
}

fn comparison_seed(mode: ComparisonMode) -> u64 {
    match mode {
        ComparisonMode::None => 0,
        ComparisonMode::PreviousPeriod => 0x5050,
        ComparisonMode::SoybeanOil => 0x5B0,
    }
}

/// Date keys for one timeframe, oldest first, ending at the anchor session.
/// The 1D view is hourly; everything longer is daily or weekly.
fn demo_dates(timeframe: Timeframe) -> Vec<String> {
    let anchor_day = NaiveDate::from_ymd_opt(ANCHOR_Y, ANCHOR_M, ANCHOR_D).unwrap();

    let (count, hours_step, days_step) = match timeframe {
        Timeframe::OneDay => (24usize, 1i64, 0i64),
        Timeframe::OneWeek => (7, 0, 1),
        Timeframe::OneMonth => (30, 0, 1),
        Timeframe::SixMonths => (26, 0, 7),
        Timeframe::OneYear => (52, 0, 7),
    };
    let count = count.min(MARKET.max_points);

    if hours_step > 0 {
        let anchor: NaiveDateTime = anchor_day.and_hms_opt(ANCHOR_HOUR, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                let offset = (count - 1 - i) as i64 * hours_step;
                (anchor - ChronoDuration::hours(offset))
                    .format(HOURLY_DATE_FORMAT)
                    .to_string()
            })
            .collect()
    } else {
        (0..count)
            .map(|i| {
                let offset = (count - 1 - i) as i64 * days_step;
                (anchor_day - ChronoDuration::days(offset))
                    .format(DAILY_DATE_FORMAT)
                    .to_string()
            })
            .collect()
    }
}

/// Walk a close price through the given dates and dress each step up as an
/// OHLC bar (open at the previous close, wicks just past the body).
fn build_series(
    dates: &[String],
    seed: u64,
    base: f64,
    drift: f64,
    volatility: f64,
) -> Vec<PricePoint> {
    let mut rng = DemoRng(seed);
    let mut close = base;

    dates
        .iter()
        .map(|date| {
            let open = close;
            close = open * (1.0 + drift + volatility * rng.next_signed());
            let high = open.max(close) * (1.0 + 0.003 * rng.next_signed().abs());
            let low = open.min(close) * (1.0 - 0.003 * rng.next_signed().abs());
            PricePoint::new(date.clone(), open, high, low, close)
        })
        .collect()
}

fn demo_sources() -> Vec<GroundingSource> {
    vec![
        GroundingSource {
            title: format!("Bursa Malaysia Derivatives — {} Settlement", MARKET.instrument),
            uri: "https://www.bursamalaysia.com/trade/our_products_services/derivatives/commodity_derivatives".to_string(),
        },
        GroundingSource {
            title: "MPOB — Daily Palm Oil Prices".to_string(),
            uri: "https://bepi.mpob.gov.my/".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn primary_fetch_is_deterministic() {
        let provider = DemoProvider::instant();
        let first = provider.fetch_primary(Timeframe::OneMonth).await.unwrap();
        let second = provider.fetch_primary(Timeframe::OneMonth).await.unwrap();
        assert_eq!(first.series, second.series);
        assert!(!first.sources.is_empty());
    }

    #[tokio::test]
    async fn primary_series_is_date_ascending_and_bounded() {
        let provider = DemoProvider::instant();
        for timeframe in [
            Timeframe::OneDay,
            Timeframe::OneWeek,
            Timeframe::OneMonth,
            Timeframe::SixMonths,
            Timeframe::OneYear,
        ] {
            let fetch = provider.fetch_primary(timeframe).await.unwrap();
            assert!(!fetch.series.is_empty());
            assert!(fetch.series.len() <= MARKET.max_points);
            for pair in fetch.series.windows(2) {
                assert!(pair[0].date < pair[1].date, "dates out of order for {timeframe}");
            }
        }
    }

    #[tokio::test]
    async fn comparison_aligns_to_a_subset_of_reference_dates() {
        let provider = DemoProvider::instant();
        let primary = provider.fetch_primary(Timeframe::OneMonth).await.unwrap();

        let comparison = provider
            .fetch_comparison(
                Timeframe::OneMonth,
                ComparisonMode::SoybeanOil,
                &primary.series,
            )
            .await
            .unwrap();

        assert!(!comparison.is_empty());
        assert!(comparison.len() < primary.series.len(), "expected calendar holes");
        for point in &comparison {
            assert!(
                primary.series.iter().any(|p| p.date == point.date),
                "comparison date {} not in reference",
                point.date
            );
        }
    }

    #[tokio::test]
    async fn comparison_modes_produce_distinct_series() {
        let provider = DemoProvider::instant();
        let primary = provider.fetch_primary(Timeframe::OneWeek).await.unwrap();

        let previous = provider
            .fetch_comparison(
                Timeframe::OneWeek,
                ComparisonMode::PreviousPeriod,
                &primary.series,
            )
            .await
            .unwrap();
        let soybean = provider
            .fetch_comparison(
                Timeframe::OneWeek,
                ComparisonMode::SoybeanOil,
                &primary.series,
            )
            .await
            .unwrap();

        // Same calendar, different markets
        assert_eq!(previous.len(), soybean.len());
        assert_ne!(previous, soybean);
        assert!(soybean.iter().all(|p| p.close < 100.0), "SBO trades in cents");
    }
}
