use chrono::Utc;

/// Date format used for daily price-point keys.
pub const DAILY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used for intraday price-point keys (1D timeframe).
pub const HOURLY_DATE_FORMAT: &str = "%Y-%m-%d %H:00";

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn how_many_seconds_ago(past_timestamp_ms: i64) -> i64 {
    // How many seconds ago was the event described by `past_timestamp_ms` ?
    (now_timestamp_ms() - past_timestamp_ms) / 1000
}
