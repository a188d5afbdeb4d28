//! Pipeline step configuration.

use serde::{Deserialize, Serialize};

use crate::types::Timepoint;

/// Which optional steps of the planning pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Drop pairs the overlap oracle rejects. Default: true.
    pub remove_non_overlapping: Option<bool>,
    /// Sort pairs and subsets for deterministic downstream order. Default: true.
    pub sort_subsets: Option<bool>,
    /// Fix the strategy's default views in every subset. Default: true.
    pub fix_default_views: Option<bool>,
    /// Additionally fix every view of these timepoints.
    #[serde(default)]
    pub fixed_timepoints: Vec<Timepoint>,
}

impl PipelineConfig {
    pub fn effective_remove_non_overlapping(&self) -> bool {
        self.remove_non_overlapping.unwrap_or(true)
    }

    pub fn effective_sort_subsets(&self) -> bool {
        self.sort_subsets.unwrap_or(true)
    }

    pub fn effective_fix_default_views(&self) -> bool {
        self.fix_default_views.unwrap_or(true)
    }
}
