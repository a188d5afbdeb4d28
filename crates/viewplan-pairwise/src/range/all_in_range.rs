use super::RangeComparator;

/// Every pair is in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllInRange;

impl<V> RangeComparator<V> for AllInRange {
    fn in_range(&self, _a: &V, _b: &V) -> bool {
        true
    }
}
