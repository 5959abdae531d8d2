use serde::Serialize;

use crate::domain::{PricePoint, VisibleRange};

/// A primary point with the comparison close (if any) joined onto it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MergedPoint {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_close: Option<f64>,
}

/// Join the comparison close onto each primary point inside the window.
///
/// Strict date-string equality — no interpolation, no nearest-date fallback.
/// Primary order and dates survive untouched; the ordering of the comparison
/// series is irrelevant to the result.
pub fn merge_window(
    primary: &[PricePoint],
    window: VisibleRange,
    comparison: Option<&[PricePoint]>,
) -> Vec<MergedPoint> {
    let end = window.end_index.min(primary.len());
    let start = window.start_index.min(end);

    primary[start..end]
        .iter()
        .map(|point| {
            // Series stay under ~60 points, so a per-point scan is fine
            let comparison_close = comparison
                .and_then(|series| series.iter().find(|c| c.date == point.date))
                .map(|c| c.close);
            MergedPoint {
                date: point.date.clone(),
                open: point.open,
                high: point.high,
                low: point.low,
                close: point.close,
                comparison_close,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, close: f64) -> PricePoint {
        PricePoint::new(date, close, close + 1.0, close - 1.0, close)
    }

    fn three_day_primary() -> Vec<PricePoint> {
        vec![
            point("2024-01-01", 100.0),
            point("2024-01-02", 101.0),
            point("2024-01-03", 102.0),
        ]
    }

    #[test]
    fn joins_by_exact_date_and_leaves_gaps_absent() {
        let comparison = vec![point("2024-01-01", 50.0), point("2024-01-03", 52.0)];

        let merged = merge_window(
            &three_day_primary(),
            VisibleRange::full(3),
            Some(&comparison),
        );

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].close, 100.0);
        assert_eq!(merged[0].comparison_close, Some(50.0));
        assert_eq!(merged[1].close, 101.0);
        assert_eq!(merged[1].comparison_close, None);
        assert_eq!(merged[2].close, 102.0);
        assert_eq!(merged[2].comparison_close, Some(52.0));
    }

    #[test]
    fn comparison_ordering_is_irrelevant() {
        let shuffled = vec![point("2024-01-03", 52.0), point("2024-01-01", 50.0)];

        let merged = merge_window(&three_day_primary(), VisibleRange::full(3), Some(&shuffled));

        assert_eq!(merged[0].comparison_close, Some(50.0));
        assert_eq!(merged[2].comparison_close, Some(52.0));
    }

    #[test]
    fn no_comparison_series_means_every_overlay_absent() {
        let merged = merge_window(&three_day_primary(), VisibleRange::full(3), None);
        assert!(merged.iter().all(|m| m.comparison_close.is_none()));
    }

    #[test]
    fn window_selects_the_primary_slice() {
        let merged = merge_window(
            &three_day_primary(),
            VisibleRange {
                start_index: 1,
                end_index: 2,
            },
            None,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].date, "2024-01-02");
    }

    #[test]
    fn empty_window_merges_to_nothing() {
        let merged = merge_window(&[], VisibleRange::full(0), None);
        assert!(merged.is_empty());
    }
}
