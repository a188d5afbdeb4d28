//! Register every timepoint against one reference timepoint.
//!
//! Views are compared within their timepoint and against the reference
//! timepoint, never across two other timepoints. That star topology lets
//! subsets be found one timepoint at a time.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::unionfind::UnionFind;
use viewplan_core::types::collections::{FxHashMap, FxHashSet};
use viewplan_core::{HasTimepoint, PairwiseError, Timepoint, ViewToken};

use super::PairingStrategy;
use crate::group::Group;
use crate::pair::Pair;
use crate::range::{RangeComparator, ReferenceTimepointRange};
use crate::setup::engine;
use crate::subset::Subset;

/// Compare within each timepoint and against one reference timepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTimepoint {
    range: ReferenceTimepointRange,
}

impl ReferenceTimepoint {
    /// Register every timepoint against `reference`.
    pub fn new(reference: Timepoint) -> Self {
        Self {
            range: ReferenceTimepointRange::new(reference),
        }
    }

    /// The reference timepoint.
    pub fn reference(&self) -> Timepoint {
        self.range.reference()
    }

    /// True when no group spans two timepoints and no pair joins two
    /// different non-reference timepoints.
    pub fn is_decomposable<V: HasTimepoint>(&self, pairs: &[Pair<V>], groups: &[Group<V>]) -> bool
    where
        V: ViewToken,
    {
        let reference = self.reference();
        let groups_local = groups.iter().all(|g| {
            let mut tps = g.iter().map(|v| v.timepoint());
            match tps.next() {
                Some(first) => tps.all(|t| t == first),
                None => true,
            }
        });
        groups_local
            && pairs.iter().all(|p| {
                let (ta, tb) = (p.a.timepoint(), p.b.timepoint());
                ta == tb || ta == reference || tb == reference
            })
    }

    /// One engine run per non-reference timepoint over its views plus the
    /// reference views, then partial subsets sharing a view are merged.
    fn detect_per_timepoint<V: ViewToken + HasTimepoint>(
        &self,
        views: &[V],
        pairs: &[Pair<V>],
        groups: &[Group<V>],
    ) -> Result<Vec<Subset<V>>, PairwiseError> {
        let reference = self.reference();
        let reference_views: Vec<V> = views
            .iter()
            .filter(|v| v.timepoint() == reference)
            .cloned()
            .collect();
        let mut by_timepoint: BTreeMap<Timepoint, Vec<V>> = BTreeMap::new();
        for v in views.iter().filter(|v| v.timepoint() != reference) {
            by_timepoint.entry(v.timepoint()).or_default().push(v.clone());
        }

        if by_timepoint.is_empty() {
            return engine::detect_subsets(views, pairs, groups);
        }

        let mut partial = Vec::new();
        for (&tp, tp_views) in &by_timepoint {
            let local = |t: Timepoint| t == tp || t == reference;

            let mut local_views = tp_views.clone();
            local_views.extend(reference_views.iter().cloned());
            let local_pairs: Vec<Pair<V>> = pairs
                .iter()
                .filter(|p| local(p.a.timepoint()) && local(p.b.timepoint()))
                .cloned()
                .collect();
            let local_groups: Vec<Group<V>> = groups
                .iter()
                .filter(|g| g.iter().all(|v| local(v.timepoint())))
                .cloned()
                .collect();

            partial.extend(engine::detect_subsets(&local_views, &local_pairs, &local_groups)?);
        }

        let subsets = merge_sharing_views(partial, reference);
        engine::ensure_groups_contained(&subsets, groups)?;

        tracing::debug!(
            reference,
            timepoints = by_timepoint.len(),
            subsets = subsets.len(),
            "reference timepoint subsets detected per timepoint"
        );
        Ok(subsets)
    }
}

impl<V: ViewToken + HasTimepoint> PairingStrategy<V> for ReferenceTimepoint {
    fn name(&self) -> &'static str {
        "reference_timepoint"
    }

    fn in_range(&self, a: &V, b: &V) -> bool {
        self.range.in_range(a, b)
    }

    fn validate(&self, views: &[V]) -> Result<(), PairwiseError> {
        if views.is_empty() {
            return Err(PairwiseError::NoViews {
                strategy: PairingStrategy::<V>::name(self).to_string(),
            });
        }
        if !views.iter().any(|v| v.timepoint() == self.reference()) {
            tracing::warn!(
                reference = self.reference(),
                "reference timepoint has no views; nothing will be fixed by default"
            );
        }
        Ok(())
    }

    /// Every view of the reference timepoint.
    fn default_fixed_views(&self, views: &[V]) -> Vec<V> {
        views
            .iter()
            .filter(|v| v.timepoint() == self.reference())
            .cloned()
            .collect()
    }

    fn detect_subsets(
        &self,
        views: &[V],
        pairs: &[Pair<V>],
        groups: &[Group<V>],
    ) -> Result<Vec<Subset<V>>, PairwiseError> {
        if self.is_decomposable(pairs, groups) && all_known(views, pairs, groups) {
            self.detect_per_timepoint(views, pairs, groups)
        } else {
            tracing::debug!(
                reference = self.reference(),
                "pairs or groups span timepoints; using whole-dataset subset detection"
            );
            engine::detect_subsets(views, pairs, groups)
        }
    }
}

/// Every pair endpoint and group member is one of `views`.
fn all_known<V: ViewToken>(views: &[V], pairs: &[Pair<V>], groups: &[Group<V>]) -> bool {
    let known: FxHashSet<&V> = views.iter().collect();
    pairs
        .iter()
        .all(|p| known.contains(&p.a) && known.contains(&p.b))
        && groups.iter().all(|g| g.iter().all(|v| known.contains(v)))
}

/// Merge subsets that share at least one view, transitively.
/// Clusters keep the position of their first member.
fn merge_sharing_views<V: ViewToken + HasTimepoint>(
    partial: Vec<Subset<V>>,
    reference: Timepoint,
) -> Vec<Subset<V>> {
    let mut uf = UnionFind::<usize>::new(partial.len());
    let mut owner: FxHashMap<&V, usize> = FxHashMap::default();
    for (i, subset) in partial.iter().enumerate() {
        for v in subset.views() {
            match owner.get(v) {
                Some(&first) => {
                    uf.union(first, i);
                }
                None => {
                    owner.insert(v, i);
                }
            }
        }
    }
    let labels = uf.into_labeling();

    let mut slot_of_root: FxHashMap<usize, usize> = FxHashMap::default();
    let mut clusters: Vec<Vec<Subset<V>>> = Vec::new();
    for (i, subset) in partial.into_iter().enumerate() {
        let slot = *slot_of_root.entry(labels[i]).or_insert_with(|| {
            clusters.push(Vec::new());
            clusters.len() - 1
        });
        clusters[slot].push(subset);
    }
    clusters
        .into_iter()
        .map(|parts| merge_cluster(parts, reference))
        .collect()
}

/// Union of the partial subsets of one cluster.
///
/// Every per-timepoint run sees all reference views, so pairs and groups
/// lying wholly on the reference timepoint repeat in each run; they are
/// taken from the first run that carries them. Everything else belongs to
/// exactly one run and is kept as given, repeated input pairs included.
fn merge_cluster<V: ViewToken + HasTimepoint>(
    parts: Vec<Subset<V>>,
    reference: Timepoint,
) -> Subset<V> {
    let on_reference = |v: &V| v.timepoint() == reference;

    let mut views = BTreeSet::new();
    let mut pairs = Vec::new();
    let mut groups = Vec::new();
    let mut seen_pairs: FxHashSet<Pair<V>> = FxHashSet::default();
    let mut seen_groups: FxHashSet<Group<V>> = FxHashSet::default();

    for part in parts {
        views.extend(part.views().iter().cloned());

        let mut carried_pairs = Vec::new();
        for pair in part.pairs() {
            if on_reference(&pair.a) && on_reference(&pair.b) {
                if seen_pairs.contains(pair) {
                    continue;
                }
                carried_pairs.push(pair.clone());
            }
            pairs.push(pair.clone());
        }
        seen_pairs.extend(carried_pairs);

        let mut carried_groups = Vec::new();
        for group in part.groups() {
            if group.iter().all(on_reference) {
                if seen_groups.contains(group) {
                    continue;
                }
                carried_groups.push(group.clone());
            }
            groups.push(group.clone());
        }
        seen_groups.extend(carried_groups);
    }

    Subset::new(views, pairs, groups)
}
