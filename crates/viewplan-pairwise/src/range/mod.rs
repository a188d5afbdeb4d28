//! Range comparators: which view pairs are candidates at all.

pub mod all_in_range;
pub mod reference_timepoint_range;
pub mod timepoint_range;

pub use all_in_range::AllInRange;
pub use reference_timepoint_range::ReferenceTimepointRange;
pub use timepoint_range::TimepointRange;

/// Predicate restricting which pairs of views may be compared.
pub trait RangeComparator<V> {
    fn in_range(&self, a: &V, b: &V) -> bool;
}

impl<V, F> RangeComparator<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    fn in_range(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}
