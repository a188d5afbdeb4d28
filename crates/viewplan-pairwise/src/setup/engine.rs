//! Connected-subset detection shared by every strategy.
//!
//! Disjoint-set over view indices: every pair unions its endpoints, views no
//! pair touches stay singletons, and every group finally unions all of its
//! members so that a group never straddles two subsets.

use std::collections::BTreeSet;

use petgraph::unionfind::UnionFind;
use viewplan_core::types::collections::FxHashMap;
use viewplan_core::{PairwiseError, ViewToken};

use crate::group::Group;
use crate::pair::Pair;
use crate::subset::Subset;

/// Partition `views` into connected subsets under `pairs` and `groups`.
///
/// Subsets come out in order of first appearance: components seen through
/// `pairs` first (in pair order), then isolated views in list order. Pairs
/// keep their input order within a subset; groups are attached to the
/// subset holding their members.
///
/// Pair endpoints or group members missing from `views` still take part and
/// end up in the output.
pub fn detect_subsets<V: ViewToken>(
    views: &[V],
    pairs: &[Pair<V>],
    groups: &[Group<V>],
) -> Result<Vec<Subset<V>>, PairwiseError> {
    let mut nodes = Nodes::with_capacity(views.len());
    let view_idx: Vec<usize> = views.iter().map(|v| nodes.intern(v)).collect();
    let known = nodes.len();
    let pair_idx: Vec<(usize, usize)> = pairs
        .iter()
        .map(|p| (nodes.intern(&p.a), nodes.intern(&p.b)))
        .collect();
    let group_idx: Vec<Vec<usize>> = groups
        .iter()
        .map(|g| g.iter().map(|v| nodes.intern(v)).collect())
        .collect();
    if nodes.len() > known {
        tracing::warn!(
            extra = nodes.len() - known,
            "pairs or groups reference views outside the view list"
        );
    }

    let n = nodes.len();

    // First-appearance rank: pair endpoints in order, then views, then group members.
    let mut rank = vec![usize::MAX; n];
    let mut next_rank = 0usize;
    let appearance = pair_idx
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .chain(view_idx.iter().copied())
        .chain(group_idx.iter().flatten().copied());
    for i in appearance {
        if rank[i] == usize::MAX {
            rank[i] = next_rank;
            next_rank += 1;
        }
    }

    let mut uf = UnionFind::<usize>::new(n);
    for &(ia, ib) in &pair_idx {
        uf.union(ia, ib);
    }
    for members in &group_idx {
        if let Some((&first, rest)) = members.split_first() {
            for &other in rest {
                uf.union(first, other);
            }
        }
    }

    let labels = uf.into_labeling();

    let mut component_rank: FxHashMap<usize, usize> = FxHashMap::default();
    for (i, &root) in labels.iter().enumerate() {
        let r = component_rank.entry(root).or_insert(rank[i]);
        *r = (*r).min(rank[i]);
    }
    let mut roots: Vec<usize> = component_rank.keys().copied().collect();
    roots.sort_by_key(|root| component_rank[root]);
    let slot: FxHashMap<usize, usize> = roots.iter().enumerate().map(|(s, &r)| (r, s)).collect();

    let mut parts: Vec<(BTreeSet<V>, Vec<Pair<V>>, Vec<Group<V>>)> =
        (0..roots.len()).map(|_| Default::default()).collect();
    for (i, node) in nodes.items.iter().enumerate() {
        parts[slot[&labels[i]]].0.insert((*node).clone());
    }
    for (pair, &(ia, _)) in pairs.iter().zip(&pair_idx) {
        parts[slot[&labels[ia]]].1.push(pair.clone());
    }
    for (group, members) in groups.iter().zip(&group_idx) {
        if let Some(&first) = members.first() {
            parts[slot[&labels[first]]].2.push(group.clone());
        }
    }

    let subsets: Vec<Subset<V>> = parts
        .into_iter()
        .map(|(views, pairs, groups)| Subset::new(views, pairs, groups))
        .collect();

    ensure_groups_contained(&subsets, groups)?;

    tracing::debug!(
        views = views.len(),
        pairs = pairs.len(),
        groups = groups.len(),
        subsets = subsets.len(),
        "detected subsets"
    );
    Ok(subsets)
}

/// Views interned to dense indices, first occurrence wins.
struct Nodes<'a, V> {
    items: Vec<&'a V>,
    index: FxHashMap<&'a V, usize>,
}

impl<'a, V: ViewToken> Nodes<'a, V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
        }
    }

    fn intern(&mut self, view: &'a V) -> usize {
        if let Some(&i) = self.index.get(view) {
            return i;
        }
        self.items.push(view);
        self.index.insert(view, self.items.len() - 1);
        self.items.len() - 1
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Every group must lie entirely inside exactly one subset.
pub fn ensure_groups_contained<V: ViewToken>(
    subsets: &[Subset<V>],
    groups: &[Group<V>],
) -> Result<(), PairwiseError> {
    let mut owner: FxHashMap<&V, usize> = FxHashMap::default();
    for (i, subset) in subsets.iter().enumerate() {
        for v in subset.views() {
            owner.insert(v, i);
        }
    }

    for group in groups {
        let touched: BTreeSet<usize> = group.iter().filter_map(|v| owner.get(v).copied()).collect();
        let fully_inside = group.iter().all(|v| owner.contains_key(v));
        if touched.len() > 1 || (!touched.is_empty() && !fully_inside) {
            return Err(PairwiseError::GroupSplitAcrossSubsets {
                group: group.to_string(),
                subsets: touched.len(),
            });
        }
    }
    Ok(())
}
