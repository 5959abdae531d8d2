//! File persistence and serialization configuration

use crate::domain::Timeframe;

/// Directory path for storing fetched price data
pub const CACHE_DIR: &str = "price_cache";

/// Base filename for price cache files (without extension)
pub const CACHE_FILENAME_WITHOUT_EXT: &str = "fcpo";

/// Current version of the price cache serialization format
pub const CACHE_VERSION: f64 = 1.0;

/// Maximum age of cached price data (seconds). Futures settle daily but the
/// dashboard advertises "recent" prices, so keep this short.
pub const CACHE_ACCEPTABLE_AGE_SECS: i64 = 15 * 60;

/// Generate timeframe-specific cache filename
/// Example: "fcpo_1M_v1.bin"
pub fn price_cache_filename(timeframe: Timeframe) -> String {
    format!(
        "{}_{}_v{}.bin",
        CACHE_FILENAME_WITHOUT_EXT, timeframe, CACHE_VERSION
    )
}
