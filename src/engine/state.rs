use std::fmt;

/// Load phase of one fetchable series kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Per-kind fetch bookkeeping: the phase plus an epoch counter.
///
/// Every trigger bumps the epoch and every completion carries the epoch it
/// was dispatched with. A completion is applied only while its epoch is still
/// current, so the latest trigger wins regardless of which request finishes
/// first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSlot {
    phase: LoadPhase,
    epoch: u64,
}

impl FetchSlot {
    /// Start a fetch: orphan any in-flight request and return the new epoch
    /// to tag the job with.
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.phase = LoadPhase::Loading;
        self.epoch
    }

    /// Stand down without fetching: orphan in-flight work, back to Idle.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.phase = LoadPhase::Idle;
    }

    pub fn finish(&mut self, ok: bool) {
        self.phase = if ok {
            LoadPhase::Loaded
        } else {
            LoadPhase::Failed
        };
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }
}

/// Error types surfaced by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Fetch succeeded but the timeframe has no points. Shown as an empty
    /// state with its own message, retryable like any other load.
    EmptyTimeframe,
    /// The primary fetch failed outright; previous data stays on screen.
    FetchFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyTimeframe => {
                write!(f, "No recent price data found for the selected timeframe.")
            }
            AppError::FetchFailed(msg) => write!(f, "Failed to fetch price data: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_bumps_epoch_and_marks_loading() {
        let mut slot = FetchSlot::default();
        assert_eq!(slot.phase(), LoadPhase::Idle);

        let first = slot.begin();
        assert!(slot.is_loading());
        assert!(slot.is_current(first));

        let second = slot.begin();
        assert!(second > first);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[test]
    fn clear_orphans_inflight_work() {
        let mut slot = FetchSlot::default();
        let inflight = slot.begin();
        slot.clear();
        assert_eq!(slot.phase(), LoadPhase::Idle);
        assert!(!slot.is_current(inflight));
    }

    #[test]
    fn finish_records_the_terminal_phase() {
        let mut slot = FetchSlot::default();
        slot.begin();
        slot.finish(true);
        assert_eq!(slot.phase(), LoadPhase::Loaded);
        slot.begin();
        slot.finish(false);
        assert_eq!(slot.phase(), LoadPhase::Failed);
    }
}
