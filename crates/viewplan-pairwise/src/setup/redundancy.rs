//! Pair filters: redundant pairs (already rigidly linked) and non-overlapping pairs.

use viewplan_core::{OverlapDetection, ViewToken};

use crate::group::Group;
use crate::pair::{Pair, PairPartition};

/// True if comparing `pair` adds nothing because its endpoints are already
/// linked through groups.
///
/// That is the case when one group holds both endpoints, or when a group of
/// `a` overlaps a group of `b` (rigid through a shared third view).
pub fn is_redundant<V: ViewToken>(pair: &Pair<V>, groups: &[Group<V>]) -> bool {
    if Group::contains_both(&pair.a, &pair.b, groups) {
        return true;
    }
    let groups_a = Group::member_of(&pair.a, groups);
    if groups_a.is_empty() {
        return false;
    }
    let groups_b = Group::member_of(&pair.b, groups);
    groups_a
        .iter()
        .any(|ga| groups_b.iter().any(|gb| ga.overlaps(gb)))
}

/// Split `pairs` into those worth comparing and the redundant ones.
pub fn remove_redundant_pairs<V: ViewToken>(
    pairs: Vec<Pair<V>>,
    groups: &[Group<V>],
) -> PairPartition<V> {
    if groups.is_empty() {
        return PairPartition {
            kept: pairs,
            removed: Vec::new(),
        };
    }
    PairPartition::split(pairs, |p| !is_redundant(p, groups))
}

/// Split `pairs` into those the oracle says overlap and those it rejects.
pub fn remove_non_overlapping_pairs<V, O>(pairs: Vec<Pair<V>>, overlap: &O) -> PairPartition<V>
where
    V: ViewToken,
    O: OverlapDetection<V> + ?Sized,
{
    PairPartition::split(pairs, |p| overlap.overlaps(&p.a, &p.b))
}
