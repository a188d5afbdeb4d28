use viewplan_core::ViewToken;

use super::PairingStrategy;
use crate::range::RangeComparator;

/// Compare every pair of views the range comparator accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllToAllRange<R> {
    range: R,
}

impl<R> AllToAllRange<R> {
    /// Pair views that `range` accepts.
    pub fn new(range: R) -> Self {
        Self { range }
    }

    /// The range comparator.
    pub fn range(&self) -> &R {
        &self.range
    }
}

impl<V: ViewToken, R: RangeComparator<V>> PairingStrategy<V> for AllToAllRange<R> {
    fn name(&self) -> &'static str {
        "all_to_all_range"
    }

    fn in_range(&self, a: &V, b: &V) -> bool {
        self.range.in_range(a, b)
    }
}
