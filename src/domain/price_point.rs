use serde::{Deserialize, Serialize};

/// One OHLC bar, keyed by its date string.
///
/// Dates are unique and strictly ascending within a series. The OHLC shape
/// (`low` at or under the body, `high` at or over it) is whatever upstream
/// reported — passed through as-is, never rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
        }
    }
}
