//! The pairwise setup: one planning run over a fixed set of views and groups.
//!
//! Drive it in order: `define_pairs` → `remove_non_overlapping_pairs`
//! (optional) → `reorder_pairs` → `detect_subsets` → `sort_subsets`
//! (optional) → `fix_views_in_all_subsets` → `Subset::grouped_pairs`.

pub mod engine;
pub mod merge;
pub mod ordering;
pub mod redundancy;

use std::cmp::Ordering;

use viewplan_core::types::collections::FxHashSet;
use viewplan_core::{OverlapDetection, PairwiseError, ViewToken};

use crate::group::Group;
use crate::pair::Pair;
use crate::strategies::PairingStrategy;
use crate::subset::Subset;

pub use engine::{detect_subsets, ensure_groups_contained};
pub use merge::merge_subsets;
pub use ordering::{lexicographic, sort_subsets_by};
pub use redundancy::{is_redundant, remove_non_overlapping_pairs, remove_redundant_pairs};

/// One planning run: views, groups and a strategy, plus the pairs and
/// subsets derived from them step by step.
pub struct PairwiseSetup<V, S> {
    views: Vec<V>,
    groups: Vec<Group<V>>,
    strategy: S,
    pairs: Vec<Pair<V>>,
    redundant: Vec<Pair<V>>,
    subsets: Vec<Subset<V>>,
}

impl<V: ViewToken, S: PairingStrategy<V>> PairwiseSetup<V, S> {
    /// Set up a planning run.
    ///
    /// Duplicate views are dropped (first occurrence kept). Groups are
    /// restricted to the supplied views; groups left empty disappear.
    pub fn new(
        views: Vec<V>,
        groups: impl IntoIterator<Item = Group<V>>,
        strategy: S,
    ) -> Result<Self, PairwiseError> {
        let views = dedup_views(views);
        strategy.validate(&views)?;
        let groups = Group::remove_non_existent_views(groups, &views);

        tracing::debug!(
            strategy = strategy.name(),
            views = views.len(),
            groups = groups.len(),
            "pairwise setup created"
        );

        Ok(Self {
            views,
            groups,
            strategy,
            pairs: Vec::new(),
            redundant: Vec::new(),
            subsets: Vec::new(),
        })
    }

    /// Compute the candidate pairs, dropping those made redundant by groups.
    ///
    /// Replaces the working pair list, so repeated calls give the same result.
    pub fn define_pairs(&mut self) -> &[Pair<V>] {
        let candidates = self.strategy.define_pairs_abstract(&self.views, &self.groups);
        let total = candidates.len();
        let parts = remove_redundant_pairs(candidates, &self.groups);

        tracing::debug!(
            strategy = self.strategy.name(),
            candidates = total,
            redundant = parts.removed.len(),
            kept = parts.kept.len(),
            "defined pairs"
        );

        self.pairs = parts.kept;
        self.redundant = parts.removed;
        &self.pairs
    }

    /// Drop pairs the oracle says cannot overlap. Returns the dropped pairs.
    pub fn remove_non_overlapping_pairs<O>(&mut self, overlap: &O) -> Vec<Pair<V>>
    where
        O: OverlapDetection<V> + ?Sized,
    {
        let parts = remove_non_overlapping_pairs(std::mem::take(&mut self.pairs), overlap);
        tracing::debug!(
            removed = parts.removed.len(),
            kept = parts.kept.len(),
            "removed non-overlapping pairs"
        );
        self.pairs = parts.kept;
        parts.removed
    }

    /// Orient every pair so that `a <= b`. The list order is unchanged.
    pub fn reorder_pairs(&mut self) {
        self.reorder_pairs_by(V::cmp);
    }

    /// Orient every pair so that `a <= b` under `cmp`.
    pub fn reorder_pairs_by(&mut self, mut cmp: impl FnMut(&V, &V) -> Ordering) {
        self.pairs = std::mem::take(&mut self.pairs)
            .into_iter()
            .map(|p| p.canonical_by(&mut cmp))
            .collect();
    }

    /// Partition the views into independent subsets with the strategy's algorithm.
    pub fn detect_subsets(&mut self) -> Result<&[Subset<V>], PairwiseError> {
        self.subsets = self
            .strategy
            .detect_subsets(&self.views, &self.pairs, &self.groups)?;
        Ok(&self.subsets)
    }

    /// Sort pairs inside each subset and the subsets themselves, lexicographically.
    pub fn sort_subsets(&mut self) {
        sort_subsets_by(&mut self.subsets, lexicographic);
    }

    /// Sort pairs inside each subset with `cmp`, then the subsets by their first pair.
    pub fn sort_subsets_by(&mut self, cmp: impl FnMut(&Pair<V>, &Pair<V>) -> Ordering) {
        sort_subsets_by(&mut self.subsets, cmp);
    }

    /// Views the strategy anchors by default.
    pub fn default_fixed_views(&self) -> Vec<V> {
        self.strategy.default_fixed_views(&self.views)
    }

    /// Fix `fixed` in every subset. Returns all pairs removed as a result.
    pub fn fix_views_in_all_subsets(&mut self, fixed: &[V]) -> Vec<Pair<V>> {
        let mut removed = Vec::new();
        for subset in &mut self.subsets {
            removed.extend(subset.fix_views(fixed.iter()));
        }
        removed
    }

    /// Fix the strategy's default views in every subset.
    pub fn fix_default_views(&mut self) -> Vec<Pair<V>> {
        let fixed = self.default_fixed_views();
        self.fix_views_in_all_subsets(&fixed)
    }

    /// Merge detected subsets by index; see [`merge_subsets`].
    pub fn merge_subsets(&mut self, indices: &[usize]) -> bool {
        merge_subsets(&mut self.subsets, indices)
    }

    /// The de-duplicated view list.
    pub fn views(&self) -> &[V] {
        &self.views
    }

    /// Groups restricted to the view list.
    pub fn groups(&self) -> &[Group<V>] {
        &self.groups
    }

    /// The pairing strategy driving this run.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The working pair list.
    pub fn pairs(&self) -> &[Pair<V>] {
        &self.pairs
    }

    /// Pairs dropped as redundant by the last `define_pairs`.
    pub fn redundant_pairs(&self) -> &[Pair<V>] {
        &self.redundant
    }

    /// Subsets from the last `detect_subsets`, as modified since.
    pub fn subsets(&self) -> &[Subset<V>] {
        &self.subsets
    }

    /// Consume the run, keeping only its subsets.
    pub fn into_subsets(self) -> Vec<Subset<V>> {
        self.subsets
    }
}

fn dedup_views<V: ViewToken>(views: Vec<V>) -> Vec<V> {
    let mut seen = FxHashSet::default();
    let before = views.len();
    let unique: Vec<V> = views.into_iter().filter(|v| seen.insert(v.clone())).collect();
    if unique.len() < before {
        tracing::warn!(duplicates = before - unique.len(), "duplicate views dropped");
    }
    unique
}
