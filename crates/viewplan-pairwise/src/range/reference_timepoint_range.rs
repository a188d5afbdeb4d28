use viewplan_core::{HasTimepoint, Timepoint};

use super::RangeComparator;

/// Star topology around one reference timepoint: views of the same
/// timepoint are in range, and every view is in range of the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTimepointRange {
    reference: Timepoint,
}

impl ReferenceTimepointRange {
    /// Star around `reference`.
    pub fn new(reference: Timepoint) -> Self {
        Self { reference }
    }

    /// The reference timepoint.
    pub fn reference(&self) -> Timepoint {
        self.reference
    }
}

impl<V: HasTimepoint> RangeComparator<V> for ReferenceTimepointRange {
    fn in_range(&self, a: &V, b: &V) -> bool {
        let (ta, tb) = (a.timepoint(), b.timepoint());
        ta == tb || ta == self.reference || tb == self.reference
    }
}

#[cfg(test)]
mod tests {
    use viewplan_core::ViewId;

    use super::*;

    #[test]
    fn star_around_reference() {
        let r = ReferenceTimepointRange::new(0);
        assert!(r.in_range(&ViewId::new(3, 0), &ViewId::new(3, 1)));
        assert!(r.in_range(&ViewId::new(0, 0), &ViewId::new(3, 1)));
        assert!(r.in_range(&ViewId::new(5, 0), &ViewId::new(0, 1)));
        assert!(!r.in_range(&ViewId::new(1, 0), &ViewId::new(2, 0)));
    }
}
