// Data providers and the local price cache
pub mod cache;
pub mod demo;
pub mod provider;

// Re-export commonly used types
pub use cache::{CacheFile, CachedProvider};
pub use demo::DemoProvider;
pub use provider::{GroundingSource, MarketDataProvider, PrimaryFetch};
