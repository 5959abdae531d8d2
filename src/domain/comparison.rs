use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Which secondary series (if any) to overlay on the tracked instrument.
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
pub enum ComparisonMode {
    /// No overlay; the comparison series stays absent.
    #[default]
    #[strum(serialize = "none")]
    None,
    /// The tracked instrument itself, one period back.
    #[strum(serialize = "previous-period")]
    PreviousPeriod,
    /// Soybean oil futures, the usual cross-commodity reference for palm oil.
    #[strum(serialize = "soybean-oil", serialize = "sbo")]
    SoybeanOil,
}

impl ComparisonMode {
    /// True for every mode that actually fetches a comparison series.
    pub fn is_active(self) -> bool {
        self != ComparisonMode::None
    }

    /// Human-readable name for the dashboard legend.
    pub fn label(self) -> &'static str {
        match self {
            ComparisonMode::None => "None",
            ComparisonMode::PreviousPeriod => "Previous Period",
            ComparisonMode::SoybeanOil => "Soybean Oil",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sbo_shorthand_parses() {
        assert_eq!(
            ComparisonMode::from_str("sbo").unwrap(),
            ComparisonMode::SoybeanOil
        );
        assert_eq!(
            ComparisonMode::from_str("SOYBEAN-OIL").unwrap(),
            ComparisonMode::SoybeanOil
        );
    }

    #[test]
    fn only_none_is_inactive() {
        assert!(!ComparisonMode::None.is_active());
        assert!(ComparisonMode::PreviousPeriod.is_active());
        assert!(ComparisonMode::SoybeanOil.is_active());
    }
}
