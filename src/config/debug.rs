//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by
//! default so normal runs stay quiet.

/// Emit fetch lifecycle logs (job dispatch, completions, stale discards).
pub const PRINT_FETCH_EVENTS: bool = true;

/// Emit viewport changes (zoom/pan/reset with the resulting window).
pub const PRINT_VIEWPORT_EVENTS: bool = false;

/// Emit cache hit/miss diagnostics (validity failures, write timings).
pub const PRINT_CACHE_EVENTS: bool = false;
