// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use data::{CachedProvider, DemoProvider, GroundingSource, MarketDataProvider, PrimaryFetch};
pub use domain::{ComparisonMode, PricePoint, Timeframe, VisibleRange};
pub use engine::{AppError, DashboardEngine};
pub use models::{MergedPoint, PriceSnapshot};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Timeframe to load (1D, 1W, 1M, 6M, 1Y)
    #[arg(long, default_value = "1M")]
    pub timeframe: Timeframe,

    /// Comparison overlay (none, previous-period, soybean-oil)
    #[arg(long, default_value = "none")]
    pub compare: ComparisonMode,

    /// Skip the local price cache and always hit the provider
    #[arg(long, default_value_t = false)]
    pub prefer_fresh: bool,

    /// Print the merged window as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
