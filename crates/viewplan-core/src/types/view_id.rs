//! Timepoint/setup view identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::traits::HasTimepoint;

/// Timepoint identifier. Signed so that range arithmetic never underflows.
pub type Timepoint = i64;

/// A view of a multi-view dataset: one setup (angle, channel, tile, ...)
/// acquired at one timepoint.
///
/// Ordered by timepoint first, then setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewId {
    pub timepoint: Timepoint,
    pub setup: u32,
}

impl ViewId {
    pub fn new(timepoint: Timepoint, setup: u32) -> Self {
        Self { timepoint, setup }
    }
}

impl HasTimepoint for ViewId {
    fn timepoint(&self) -> Timepoint {
        self.timepoint
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tp{}/setup{}", self.timepoint, self.setup)
    }
}

impl From<(Timepoint, u32)> for ViewId {
    fn from((timepoint, setup): (Timepoint, u32)) -> Self {
        Self { timepoint, setup }
    }
}
