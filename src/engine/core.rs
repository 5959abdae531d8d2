use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

#[cfg(debug_assertions)]
use crate::config::{PRINT_FETCH_EVENTS, PRINT_VIEWPORT_EVENTS};
use crate::data::{GroundingSource, MarketDataProvider, PrimaryFetch};
use crate::domain::{ComparisonMode, PricePoint, Timeframe, VisibleRange};
use crate::models::{MergedPoint, PriceSnapshot, SeriesStore, merge_window};

use super::messages::{FetchJob, FetchOutcome};
use super::state::{AppError, FetchSlot};
use super::worker;

/// The dashboard engine: owns the loaded series, the visible window and the
/// fetch lifecycle for both series kinds.
///
/// All mutation happens on the caller's thread — either inside `update()`
/// (draining worker results) or in the synchronous selection and viewport
/// operations. The worker only ever talks through the channels.
pub struct DashboardEngine {
    store: SeriesStore,
    visible: VisibleRange,

    timeframe: Timeframe,
    comparison_mode: ComparisonMode,
    sources: Vec<GroundingSource>,

    primary: FetchSlot,
    comparison: FetchSlot,
    last_error: Option<AppError>,

    /// Worker communication
    job_tx: Sender<FetchJob>,
    result_rx: Receiver<FetchOutcome>,
}

impl DashboardEngine {
    /// Initialize the engine and spawn the fetch worker. Nothing is fetched
    /// yet; call `refresh()` (or a selection setter) to load data.
    pub fn new(provider: Arc<dyn MarketDataProvider>, timeframe: Timeframe) -> Self {
        let (job_tx, job_rx) = channel::<FetchJob>();
        let (result_tx, result_rx) = channel::<FetchOutcome>();

        worker::spawn_fetch_worker(provider, job_rx, result_tx);

        Self {
            store: SeriesStore::default(),
            visible: VisibleRange::default(),
            timeframe,
            comparison_mode: ComparisonMode::None,
            sources: Vec::new(),
            primary: FetchSlot::default(),
            comparison: FetchSlot::default(),
            last_error: None,
            job_tx,
            result_rx,
        }
    }

    // --- SELECTION TRIGGERS ---

    /// Switch timeframe. A no-op when already selected, otherwise reloads.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        if self.timeframe == timeframe {
            return;
        }
        self.timeframe = timeframe;
        self.start_primary_fetch();
    }

    /// Reload the current timeframe (also the retry affordance after a
    /// failed fetch).
    pub fn refresh(&mut self) {
        self.start_primary_fetch();
    }

    /// Switch the comparison overlay. `None` clears it without fetching.
    pub fn set_comparison_mode(&mut self, mode: ComparisonMode) {
        if self.comparison_mode == mode {
            return;
        }
        self.comparison_mode = mode;
        self.start_comparison_fetch();
    }

    // --- VIEWPORT ---

    pub fn zoom_in(&mut self) {
        self.set_visible(self.visible.zoom_in());
    }

    pub fn zoom_out(&mut self) {
        self.set_visible(self.visible.zoom_out(self.store.primary_len()));
    }

    pub fn pan_left(&mut self) {
        self.set_visible(self.visible.pan_left());
    }

    pub fn pan_right(&mut self) {
        self.set_visible(self.visible.pan_right(self.store.primary_len()));
    }

    pub fn reset_zoom(&mut self) {
        self.set_visible(VisibleRange::full(self.store.primary_len()));
    }

    pub fn can_zoom_in(&self) -> bool {
        self.visible.can_zoom_in()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.visible.can_zoom_out(self.store.primary_len())
    }

    pub fn can_pan_left(&self) -> bool {
        self.visible.can_pan_left()
    }

    pub fn can_pan_right(&self) -> bool {
        self.visible.can_pan_right(self.store.primary_len())
    }

    fn set_visible(&mut self, next: VisibleRange) {
        #[cfg(debug_assertions)]
        if PRINT_VIEWPORT_EVENTS && next != self.visible {
            log::info!("[viewport] {:?} -> {:?}", self.visible, next);
        }
        self.visible = next;
    }

    // --- THE PUMP ---

    /// Drain completed fetches and apply their transitions. Returns TRUE
    /// while either series kind is still loading, so the caller knows to
    /// keep polling.
    pub fn update(&mut self) -> bool {
        while let Ok(outcome) = self.result_rx.try_recv() {
            self.handle_outcome(outcome);
        }
        self.is_loading() || self.is_comparison_loading()
    }

    // --- PRESENTATION ACCESSORS ---

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn comparison_mode(&self) -> ComparisonMode {
        self.comparison_mode
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.primary.is_loading()
    }

    pub fn is_comparison_loading(&self) -> bool {
        self.comparison.is_loading()
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    pub fn sources(&self) -> &[GroundingSource] {
        &self.sources
    }

    pub fn price_snapshot(&self) -> Option<PriceSnapshot> {
        self.store.snapshot()
    }

    pub fn primary_series(&self) -> &[PricePoint] {
        self.store.primary()
    }

    /// The windowed primary slice with the comparison overlay joined on.
    pub fn merged_window(&self) -> Vec<MergedPoint> {
        merge_window(self.store.primary(), self.visible, self.store.comparison())
    }

    // --- INTERNAL LOGIC ---

    fn start_primary_fetch(&mut self) {
        let epoch = self.primary.begin();
        self.last_error = None;

        #[cfg(debug_assertions)]
        if PRINT_FETCH_EVENTS {
            log::info!("[fetch] primary {} (epoch {})", self.timeframe, epoch);
        }

        // Send failing means the worker is gone and the engine is shutting
        // down with it; the orphaned Loading phase is moot at that point.
        let _ = self.job_tx.send(FetchJob::Primary {
            timeframe: self.timeframe,
            epoch,
        });
    }

    fn start_comparison_fetch(&mut self) {
        if !self.comparison_mode.is_active() || !self.store.has_primary_data() {
            // Nothing to overlay: drop the data, orphan any in-flight fetch
            self.comparison.clear();
            self.store.clear_comparison();
            return;
        }

        let epoch = self.comparison.begin();

        #[cfg(debug_assertions)]
        if PRINT_FETCH_EVENTS {
            log::info!(
                "[fetch] comparison {} / {} (epoch {})",
                self.timeframe,
                self.comparison_mode,
                epoch
            );
        }

        let _ = self.job_tx.send(FetchJob::Comparison {
            timeframe: self.timeframe,
            mode: self.comparison_mode,
            reference: self.store.primary().to_vec(),
            epoch,
            primary_epoch: self.primary.epoch(),
        });
    }

    pub(crate) fn handle_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Primary { epoch, result } => self.handle_primary(epoch, result),
            FetchOutcome::Comparison {
                epoch,
                primary_epoch,
                result,
            } => self.handle_comparison(epoch, primary_epoch, result),
        }
    }

    fn handle_primary(&mut self, epoch: u64, result: Result<PrimaryFetch, String>) {
        if !self.primary.is_current(epoch) {
            #[cfg(debug_assertions)]
            if PRINT_FETCH_EVENTS {
                log::info!("[fetch] dropping superseded primary result (epoch {})", epoch);
            }
            return;
        }

        match result {
            Ok(fetch) => {
                self.primary.finish(true);

                let PrimaryFetch { series, sources } = fetch;
                self.store.replace_primary(series);
                self.sources = sources;
                // The one place the window is ever reset
                self.visible = VisibleRange::full(self.store.primary_len());

                if self.store.has_primary_data() {
                    self.last_error = None;
                    log::info!(
                        "Loaded {} points for {}",
                        self.store.primary_len(),
                        self.timeframe
                    );
                } else {
                    self.last_error = Some(AppError::EmptyTimeframe);
                }

                // Primary replaced: the overlay must re-align (or go away)
                self.start_comparison_fetch();
            }
            Err(msg) => {
                self.primary.finish(false);
                // Previous series and window stay on screen
                log::error!("Primary fetch failed: {}", msg);
                self.last_error = Some(AppError::FetchFailed(msg));
            }
        }
    }

    fn handle_comparison(
        &mut self,
        epoch: u64,
        primary_epoch: u64,
        result: Result<Vec<PricePoint>, String>,
    ) {
        if !self.comparison.is_current(epoch) || !self.primary.is_current(primary_epoch) {
            // Superseded by a newer trigger, or keyed to a primary series
            // that has since been replaced. Either way: not ours anymore.
            #[cfg(debug_assertions)]
            if PRINT_FETCH_EVENTS {
                log::info!("[fetch] dropping superseded comparison result (epoch {})", epoch);
            }
            return;
        }

        self.comparison.finish(result.is_ok());
        match result {
            Ok(series) => self.store.set_comparison(series),
            Err(msg) => {
                // Best-effort overlay: never surfaces past the log
                log::warn!("Failed to load comparison data: {}", msg);
                self.store.clear_comparison();
            }
        }
    }
}
