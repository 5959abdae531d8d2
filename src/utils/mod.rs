// Small shared helpers
pub mod time_utils;

pub use time_utils::{how_many_seconds_ago, now_timestamp_ms};
