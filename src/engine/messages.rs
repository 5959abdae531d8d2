use crate::data::PrimaryFetch;
use crate::domain::{ComparisonMode, PricePoint, Timeframe};

/// A fetch dispatched to the background worker.
#[derive(Debug, Clone)]
pub enum FetchJob {
    Primary {
        timeframe: Timeframe,
        epoch: u64,
    },
    Comparison {
        timeframe: Timeframe,
        mode: ComparisonMode,
        /// Snapshot of the primary series the overlay must align to.
        reference: Vec<PricePoint>,
        epoch: u64,
        /// The primary epoch this job was keyed to. If the primary moves on
        /// before the result lands, the result is dropped.
        primary_epoch: u64,
    },
}

/// The result returned by the worker.
///
/// Errors are stringified so the message stays `Send + Clone` crossing the
/// channel; the engine rewraps them for display.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Primary {
        epoch: u64,
        result: Result<PrimaryFetch, String>,
    },
    Comparison {
        epoch: u64,
        primary_epoch: u64,
        result: Result<Vec<PricePoint>, String>,
    },
}
