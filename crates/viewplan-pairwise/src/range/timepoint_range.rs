use viewplan_core::constants::SAME_TIMEPOINT_RANGE;
use viewplan_core::{HasTimepoint, Timepoint};

use super::RangeComparator;

/// Views are in range when their timepoints differ by at most `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimepointRange {
    radius: Timepoint,
}

impl TimepointRange {
    /// A negative radius is clamped to zero.
    pub fn new(radius: Timepoint) -> Self {
        Self {
            radius: radius.max(SAME_TIMEPOINT_RANGE),
        }
    }

    /// Only views of the same timepoint.
    pub fn same_timepoint() -> Self {
        Self::new(SAME_TIMEPOINT_RANGE)
    }

    /// Largest accepted timepoint distance.
    pub fn radius(&self) -> Timepoint {
        self.radius
    }
}

impl<V: HasTimepoint> RangeComparator<V> for TimepointRange {
    fn in_range(&self, a: &V, b: &V) -> bool {
        a.timepoint().abs_diff(b.timepoint()) <= self.radius.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use viewplan_core::ViewId;

    use super::*;

    #[test]
    fn radius_zero_is_same_timepoint() {
        let r = TimepointRange::same_timepoint();
        assert!(r.in_range(&ViewId::new(2, 0), &ViewId::new(2, 1)));
        assert!(!r.in_range(&ViewId::new(2, 0), &ViewId::new(3, 0)));
    }

    #[test]
    fn radius_is_inclusive_and_symmetric() {
        let r = TimepointRange::new(2);
        assert!(r.in_range(&ViewId::new(0, 0), &ViewId::new(2, 0)));
        assert!(r.in_range(&ViewId::new(2, 0), &ViewId::new(0, 0)));
        assert!(!r.in_range(&ViewId::new(0, 0), &ViewId::new(3, 0)));
        assert!(r.in_range(&ViewId::new(-1, 0), &ViewId::new(1, 0)));
    }

    #[test]
    fn negative_radius_clamps() {
        assert_eq!(TimepointRange::new(-4).radius(), 0);
    }
}
