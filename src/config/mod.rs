//! Configuration module for the FCPO tracker.

pub mod chart;
pub mod market;
pub mod persistence;

mod debug; // Private with a public re-export so files use crate::config::PRINT_* directly
pub use debug::{PRINT_CACHE_EVENTS, PRINT_FETCH_EVENTS, PRINT_VIEWPORT_EVENTS};

// Re-export commonly used items
pub use chart::CHART;
pub use market::MARKET;
pub use persistence::{CACHE_ACCEPTABLE_AGE_SECS, CACHE_DIR, CACHE_VERSION, price_cache_filename};
