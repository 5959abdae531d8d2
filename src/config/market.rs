//! Instrument and fetch-sizing configuration.

/// The tracked instrument and its comparison counterpart.
pub struct MarketConfig {
    /// Exchange ticker for the tracked contract
    pub instrument: &'static str,
    /// Human-readable name shown in the dashboard header
    pub instrument_label: &'static str,
    /// Settlement currency of the tracked contract
    pub currency: &'static str,
    /// Ticker for the cross-commodity comparison series
    pub comparison_instrument: &'static str,
    /// Upper bound on points a provider should return for one timeframe
    pub max_points: usize,
}

pub const MARKET: MarketConfig = MarketConfig {
    instrument: "FCPO",
    instrument_label: "Crude Palm Oil Futures (Bursa Malaysia)",
    currency: "MYR",
    comparison_instrument: "SBO",
    max_points: 60,
};
