//! Chart viewport tuning.

/// Configuration for the zoom/pan window over the loaded series.
pub struct ChartConfig {
    // Narrowest window zoom-in will start from. A zoom step that begins
    // above this floor may still land below it (step is at least 1 candle).
    pub min_candles_visible: usize,
    // Zoom steps by width / divisor, so 10 => 10% of the window per step
    pub zoom_step_divisor: usize,
    // Pan shifts by width / divisor, so 5 => 20% of the window per step
    pub pan_step_divisor: usize,
}

pub const CHART: ChartConfig = ChartConfig {
    min_candles_visible: 5,
    zoom_step_divisor: 10,
    pan_step_divisor: 5,
};
