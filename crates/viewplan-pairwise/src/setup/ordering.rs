//! Deterministic ordering of pairs and subsets.

use std::cmp::Ordering;

use viewplan_core::ViewToken;

use crate::pair::Pair;
use crate::subset::Subset;

/// Sort every subset's pairs by `cmp`, then the subsets by their first pair.
///
/// Subsets without pairs sort first; ties keep their relative order.
pub fn sort_subsets_by<V: ViewToken>(
    subsets: &mut [Subset<V>],
    mut cmp: impl FnMut(&Pair<V>, &Pair<V>) -> Ordering,
) {
    for subset in subsets.iter_mut() {
        subset.sort_pairs_by(&mut cmp);
    }
    subsets.sort_by(|x, y| match (x.pairs().first(), y.pairs().first()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(p), Some(q)) => cmp(p, q),
    });
}

/// Lexicographic pair order: first endpoint, then second.
pub fn lexicographic<V: Ord>(p: &Pair<V>, q: &Pair<V>) -> Ordering {
    p.a.cmp(&q.a).then_with(|| p.b.cmp(&q.b))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn subset(pairs: &[(u32, u32)]) -> Subset<u32> {
        let pairs: Vec<Pair<u32>> = pairs.iter().map(|&(a, b)| Pair::new(a, b)).collect();
        let views: BTreeSet<u32> = pairs.iter().flat_map(|p| [p.a, p.b]).collect();
        Subset::new(views, pairs, vec![])
    }

    #[test]
    fn empty_subsets_first_then_by_first_pair() {
        let mut subsets = vec![
            subset(&[(5, 6), (3, 4)]),
            Subset::new(BTreeSet::from([9]), vec![], vec![]),
            subset(&[(1, 2)]),
        ];
        sort_subsets_by(&mut subsets, lexicographic);
        assert!(subsets[0].is_trivial());
        assert_eq!(subsets[1].pairs(), &[Pair::new(1, 2)]);
        assert_eq!(subsets[2].pairs(), &[Pair::new(3, 4), Pair::new(5, 6)]);
    }
}
