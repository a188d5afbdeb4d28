//! Pairing strategies: which views are compared and how subsets are found.
//!
//! Every strategy shares the generic subset engine; a strategy only
//! overrides what differs (its range predicate, default fixed views, or a
//! faster subset decomposition).

pub mod all_to_all;
pub mod all_to_all_range;
pub mod any;
pub mod individual_timepoints;
pub mod reference_timepoint;

pub use all_to_all::AllToAll;
pub use all_to_all_range::AllToAllRange;
pub use any::AnyStrategy;
pub use individual_timepoints::IndividualTimepoints;
pub use reference_timepoint::ReferenceTimepoint;

use viewplan_core::{PairwiseError, ViewToken};

use crate::group::Group;
use crate::pair::Pair;
use crate::setup::engine;
use crate::subset::Subset;

/// How a strategy defines candidate pairs, validates input, picks default
/// anchors and finds subsets. Only `name` and `in_range` are required.
pub trait PairingStrategy<V: ViewToken> {
    /// Short stable name used in logs and reports.
    fn name(&self) -> &'static str;

    fn in_range(&self, a: &V, b: &V) -> bool;

    /// Reject view lists the strategy cannot work with.
    fn validate(&self, _views: &[V]) -> Result<(), PairwiseError> {
        Ok(())
    }

    /// Raw candidate pairs, before redundancy filtering.
    fn define_pairs_abstract(&self, views: &[V], groups: &[Group<V>]) -> Vec<Pair<V>> {
        all_pairs_in_range(views, groups, |a, b| self.in_range(a, b))
    }

    fn default_fixed_views(&self, _views: &[V]) -> Vec<V> {
        Vec::new()
    }

    fn detect_subsets(
        &self,
        views: &[V],
        pairs: &[Pair<V>],
        groups: &[Group<V>],
    ) -> Result<Vec<Subset<V>>, PairwiseError> {
        engine::detect_subsets(views, pairs, groups)
    }
}

/// Every `(views[i], views[j])` with `i < j` that is in range and not
/// already joined by a single group.
pub fn all_pairs_in_range<V: ViewToken>(
    views: &[V],
    groups: &[Group<V>],
    in_range: impl Fn(&V, &V) -> bool,
) -> Vec<Pair<V>> {
    let mut pairs = Vec::new();
    for (i, a) in views.iter().enumerate() {
        for b in &views[i + 1..] {
            if a != b && in_range(a, b) && !Group::contains_both(a, b, groups) {
                pairs.push(Pair::new(a.clone(), b.clone()));
            }
        }
    }
    pairs
}
