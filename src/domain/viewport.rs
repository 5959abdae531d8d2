use serde::{Deserialize, Serialize};

use crate::config::CHART;

/// Half-open index window `[start_index, end_index)` into the loaded series.
///
/// Every operation is a pure `(range, series_len) -> range` step with no
/// failure path: out-of-room zooms and pans are clamped, never rejected. The
/// window is only ever replaced wholesale when a new series arrives, via
/// [`VisibleRange::full`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl VisibleRange {
    /// The full extent of a series of `series_len` points. Also the reset
    /// target: resetting is just `full()` again, so it is idempotent.
    pub fn full(series_len: usize) -> Self {
        Self {
            start_index: 0,
            end_index: series_len,
        }
    }

    /// Number of candles inside the window.
    pub fn width(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// Shrink symmetrically by one zoom step. No-op once the window is at or
    /// under the minimum width.
    ///
    /// The gate is on entry only: a step from just above the minimum can land
    /// below it, because the step never drops under one candle. That matches
    /// the original dashboard's boundary behavior and stays put.
    pub fn zoom_in(self) -> Self {
        if self.width() <= CHART.min_candles_visible {
            return self;
        }
        let amount = zoom_step(self.width());
        Self {
            start_index: self.start_index + amount,
            end_index: self.end_index - amount,
        }
    }

    /// Grow symmetrically by one zoom step, clamped to `[0, series_len]`.
    pub fn zoom_out(self, series_len: usize) -> Self {
        let amount = zoom_step(self.width());
        Self {
            start_index: self.start_index.saturating_sub(amount),
            end_index: (self.end_index + amount).min(series_len),
        }
    }

    /// Shift the window toward older candles, preserving its width. The
    /// shift is capped by the room available, not the window resized.
    pub fn pan_left(self) -> Self {
        let width = self.width();
        let new_start = self.start_index.saturating_sub(pan_step(width));
        Self {
            start_index: new_start,
            end_index: new_start + width,
        }
    }

    /// Shift the window toward newer candles, preserving its width.
    pub fn pan_right(self, series_len: usize) -> Self {
        let width = self.width();
        let new_end = (self.end_index + pan_step(width)).min(series_len);
        Self {
            start_index: new_end.saturating_sub(width),
            end_index: new_end,
        }
    }

    pub fn can_zoom_in(&self) -> bool {
        self.width() > CHART.min_candles_visible
    }

    pub fn can_zoom_out(&self, series_len: usize) -> bool {
        self.start_index > 0 || self.end_index < series_len
    }

    pub fn can_pan_left(&self) -> bool {
        self.start_index > 0
    }

    pub fn can_pan_right(&self, series_len: usize) -> bool {
        self.end_index < series_len
    }
}

fn zoom_step(width: usize) -> usize {
    (width / CHART.zoom_step_divisor).max(1)
}

fn pan_step(width: usize) -> usize {
    (width / CHART.pan_step_divisor).max(1)
}
