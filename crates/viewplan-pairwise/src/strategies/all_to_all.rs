use viewplan_core::ViewToken;

use super::PairingStrategy;
use crate::range::{AllInRange, RangeComparator};

/// Compare every view with every other view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllToAll;

impl<V: ViewToken> PairingStrategy<V> for AllToAll {
    fn name(&self) -> &'static str {
        "all_to_all"
    }

    fn in_range(&self, a: &V, b: &V) -> bool {
        AllInRange.in_range(a, b)
    }
}
