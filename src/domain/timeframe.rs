use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Lookback window requested from the price provider.
///
/// Parses from the dashboard shorthand (`1D`, `1W`, `1M`, `6M`, `1Y`), which
/// is also how it renders and how cache files are named.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Timeframe {
    #[strum(serialize = "1D")]
    OneDay,
    #[strum(serialize = "1W")]
    OneWeek,
    #[default]
    #[strum(serialize = "1M")]
    OneMonth,
    #[strum(serialize = "6M")]
    SixMonths,
    #[strum(serialize = "1Y")]
    OneYear,
}
