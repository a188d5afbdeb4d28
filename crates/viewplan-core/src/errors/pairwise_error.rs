//! Planner errors.

use super::error_code::{self, ErrorCode};
use super::ConfigError;

/// Errors raised while setting up or partitioning pairwise comparisons.
///
/// Ordinary edge cases (empty groups, isolated views, degenerate merges)
/// are not errors; they degrade to empty or trivial results.
#[derive(Debug, thiserror::Error)]
pub enum PairwiseError {
    #[error("no views supplied to strategy {strategy}")]
    NoViews { strategy: String },

    #[error("group {group} is split across {subsets} subsets")]
    GroupSplitAcrossSubsets { group: String, subsets: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for PairwiseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoViews { .. } => error_code::NO_VIEWS,
            Self::GroupSplitAcrossSubsets { .. } => error_code::GROUP_SPLIT,
            Self::Config(e) => e.error_code(),
        }
    }
}
