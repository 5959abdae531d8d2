use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::PricePoint;

// ============================================================================
// SeriesStore: the loaded primary series plus the optional comparison overlay
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct SeriesStore {
    primary: Vec<PricePoint>,
    comparison: Option<Vec<PricePoint>>,
}

impl SeriesStore {
    /// Replace the primary series wholesale. Old data is discarded, never
    /// merged. Out-of-order dates are logged and passed through — upstream
    /// owns data quality.
    pub fn replace_primary(&mut self, series: Vec<PricePoint>) {
        if let Some((a, b)) = series
            .iter()
            .tuple_windows()
            .find(|(a, b)| a.date >= b.date)
        {
            log::warn!(
                "primary series dates not strictly ascending: {:?} then {:?}",
                a.date,
                b.date
            );
        }
        self.primary = series;
    }

    pub fn primary(&self) -> &[PricePoint] {
        &self.primary
    }

    pub fn primary_len(&self) -> usize {
        self.primary.len()
    }

    pub fn has_primary_data(&self) -> bool {
        !self.primary.is_empty()
    }

    pub fn comparison(&self) -> Option<&[PricePoint]> {
        self.comparison.as_deref()
    }

    pub fn set_comparison(&mut self, series: Vec<PricePoint>) {
        self.comparison = Some(series);
    }

    pub fn clear_comparison(&mut self) {
        self.comparison = None;
    }

    /// Latest price and its move, recomputed from whatever is loaded.
    pub fn snapshot(&self) -> Option<PriceSnapshot> {
        PriceSnapshot::from_series(&self.primary)
    }
}

// ============================================================================
// PriceSnapshot: the header numbers (last close, change vs previous close)
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceSnapshot {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl PriceSnapshot {
    fn from_series(series: &[PricePoint]) -> Option<Self> {
        let latest = series.last()?;
        // A single-point series compares against itself (zero change)
        let previous = if series.len() > 1 {
            &series[series.len() - 2]
        } else {
            latest
        };
        let change = latest.close - previous.close;
        let change_percent = if previous.close != 0.0 {
            (change / previous.close) * 100.0
        } else {
            0.0
        };
        Some(Self {
            price: latest.close,
            change,
            change_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, close: f64) -> PricePoint {
        PricePoint::new(date, close, close, close, close)
    }

    #[test]
    fn snapshot_uses_last_two_closes() {
        let mut store = SeriesStore::default();
        store.replace_primary(vec![point("2024-01-01", 4000.0), point("2024-01-02", 4100.0)]);

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.price, 4100.0);
        assert_eq!(snapshot.change, 100.0);
        assert!((snapshot.change_percent - 2.5).abs() < 1e-9);
    }

    #[test]
    fn single_point_snapshot_has_zero_change() {
        let mut store = SeriesStore::default();
        store.replace_primary(vec![point("2024-01-01", 4000.0)]);

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.price, 4000.0);
        assert_eq!(snapshot.change, 0.0);
        assert_eq!(snapshot.change_percent, 0.0);
    }

    #[test]
    fn zero_previous_close_avoids_division() {
        let mut store = SeriesStore::default();
        store.replace_primary(vec![point("2024-01-01", 0.0), point("2024-01-02", 50.0)]);

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.change, 50.0);
        assert_eq!(snapshot.change_percent, 0.0);
    }

    #[test]
    fn empty_store_has_no_snapshot() {
        assert!(SeriesStore::default().snapshot().is_none());
    }

    #[test]
    fn replace_discards_old_primary_and_keeps_comparison_rules_separate() {
        let mut store = SeriesStore::default();
        store.replace_primary(vec![point("2024-01-01", 1.0)]);
        store.set_comparison(vec![point("2024-01-01", 2.0)]);

        store.replace_primary(vec![point("2024-02-01", 3.0), point("2024-02-02", 4.0)]);
        assert_eq!(store.primary_len(), 2);
        assert_eq!(store.primary()[0].date, "2024-02-01");
        // Replacing the primary does not itself clear the overlay; the
        // engine decides when the comparison series is stale.
        assert!(store.comparison().is_some());

        store.clear_comparison();
        assert!(store.comparison().is_none());
    }
}
