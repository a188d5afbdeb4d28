use viewplan_core::{HasTimepoint, ViewToken};

use super::PairingStrategy;
use crate::range::{RangeComparator, TimepointRange};

/// Compare views only within their own timepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndividualTimepoints {
    range: TimepointRange,
}

impl IndividualTimepoints {
    /// Same-timepoint pairing.
    pub fn new() -> Self {
        Self {
            range: TimepointRange::same_timepoint(),
        }
    }
}

impl Default for IndividualTimepoints {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ViewToken + HasTimepoint> PairingStrategy<V> for IndividualTimepoints {
    fn name(&self) -> &'static str {
        "individual_timepoints"
    }

    fn in_range(&self, a: &V, b: &V) -> bool {
        self.range.in_range(a, b)
    }
}
