//! Pairing strategy configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMEPOINT_RANGE;
use crate::errors::ConfigError;
use crate::types::Timepoint;

/// Which pairs of views are candidates for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Every view against every other view.
    #[default]
    AllToAll,
    /// Every view against views within `range` timepoints.
    AllToAllRange,
    /// Only views of the same timepoint.
    IndividualTimepoints,
    /// Views of the same timepoint, plus every view against the reference timepoint.
    ReferenceTimepoint,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllToAll => "all_to_all",
            Self::AllToAllRange => "all_to_all_range",
            Self::IndividualTimepoints => "individual_timepoints",
            Self::ReferenceTimepoint => "reference_timepoint",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all_to_all" => Ok(Self::AllToAll),
            "all_to_all_range" => Ok(Self::AllToAllRange),
            "individual_timepoints" => Ok(Self::IndividualTimepoints),
            "reference_timepoint" => Ok(Self::ReferenceTimepoint),
            other => Err(ConfigError::InvalidValue {
                field: "strategy.kind".to_string(),
                message: format!("unknown strategy '{other}'"),
            }),
        }
    }
}

/// Strategy section of the plan config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StrategyConfig {
    /// Strategy kind. Default: `all_to_all`.
    pub kind: Option<StrategyKind>,
    /// Timepoint radius for `all_to_all_range`. Default: 1.
    pub range: Option<i64>,
    /// Reference timepoint for `reference_timepoint`. No default.
    pub reference_timepoint: Option<Timepoint>,
}

impl StrategyConfig {
    /// Returns the effective strategy kind, defaulting to `all_to_all`.
    pub fn effective_kind(&self) -> StrategyKind {
        self.kind.unwrap_or_default()
    }

    /// Returns the effective timepoint radius, defaulting to 1.
    pub fn effective_range(&self) -> i64 {
        self.range.unwrap_or(DEFAULT_TIMEPOINT_RANGE)
    }
}
