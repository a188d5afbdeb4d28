//! Subsets: connected components of the comparison graph.
//!
//! A subset is an independent unit of registration work. It owns its views,
//! the pairs between them, the groups touching them, and the views fixed as
//! anchors. Subsets produced by one `detect_subsets` call share no views and
//! no pairs, so each one can be handed to a separate worker.

use std::collections::BTreeSet;

use serde::Serialize;
use viewplan_core::types::collections::FxHashSet;
use viewplan_core::ViewToken;

use crate::group::Group;
use crate::pair::{Pair, PairPartition};

/// A connected set of views with the pairs and groups between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subset<V> {
    views: BTreeSet<V>,
    pairs: Vec<Pair<V>>,
    groups: Vec<Group<V>>,
    fixed_views: BTreeSet<V>,
}

impl<V: ViewToken> Subset<V> {
    /// A subset with nothing fixed yet.
    pub fn new(views: BTreeSet<V>, pairs: Vec<Pair<V>>, groups: Vec<Group<V>>) -> Self {
        Self {
            views,
            pairs,
            groups,
            fixed_views: BTreeSet::new(),
        }
    }

    /// Views of this subset.
    pub fn views(&self) -> &BTreeSet<V> {
        &self.views
    }

    /// Pairs still to be compared.
    pub fn pairs(&self) -> &[Pair<V>] {
        &self.pairs
    }

    /// Groups attached to this subset.
    pub fn groups(&self) -> &[Group<V>] {
        &self.groups
    }

    /// Views anchored so far.
    pub fn fixed_views(&self) -> &BTreeSet<V> {
        &self.fixed_views
    }

    /// True if `view` belongs to this subset.
    pub fn contains(&self, view: &V) -> bool {
        self.views.contains(view)
    }

    /// No pairs left: nothing to register in this subset.
    pub fn is_trivial(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Reorder the pair list with `cmp`.
    pub fn sort_pairs_by(&mut self, cmp: impl FnMut(&Pair<V>, &Pair<V>) -> std::cmp::Ordering) {
        self.pairs.sort_by(cmp);
    }

    /// Associated groups holding at least one fixed view.
    pub fn fixed_groups(&self) -> Vec<&Group<V>> {
        self.groups
            .iter()
            .filter(|g| g.iter().any(|v| self.fixed_views.contains(v)))
            .collect()
    }

    /// Anchor `fixed` (restricted to this subset's views) and prune the pairs
    /// that no longer need comparing. Returns the removed pairs.
    ///
    /// A pair is removed when both endpoints are fixed, or when its endpoints
    /// lie in two different groups that each already hold a fixed view.
    pub fn fix_views<'a>(&mut self, fixed: impl IntoIterator<Item = &'a V>) -> Vec<Pair<V>>
    where
        V: 'a,
    {
        for view in fixed {
            if self.views.contains(view) {
                self.fixed_views.insert(view.clone());
            }
        }

        let pairs = std::mem::take(&mut self.pairs);
        let fixed_views = &self.fixed_views;
        let both_fixed = PairPartition::split(pairs, |p| {
            !(fixed_views.contains(&p.a) && fixed_views.contains(&p.b))
        });
        let mut removed = both_fixed.removed;

        let fixed_groups = self.fixed_groups();
        let kept = if fixed_groups.len() > 1 {
            let anchored = PairPartition::split(both_fixed.kept, |p| {
                !links_distinct_groups(p, &fixed_groups)
            });
            removed.extend(anchored.removed);
            anchored.kept
        } else {
            both_fixed.kept
        };

        if !removed.is_empty() {
            tracing::debug!(
                fixed = self.fixed_views.len(),
                removed = removed.len(),
                remaining = kept.len(),
                "pruned pairs between fixed views"
            );
        }
        self.pairs = kept;
        removed
    }

    /// Group-level pairs for comparing pooled group data once instead of per view pair.
    ///
    /// Views not covered by any associated group act as singleton groups.
    /// Each view pair contributes every (group of `a`, group of `b`)
    /// combination; a group is never paired with itself and `(x, y)` and
    /// `(y, x)` count once. Order follows first appearance.
    pub fn grouped_pairs(&self) -> Vec<Pair<Group<V>>> {
        let mut covering: Vec<Group<V>> = self.groups.clone();
        let uncovered: Vec<V> = self
            .views
            .iter()
            .filter(|v| !self.groups.iter().any(|g| g.contains(v)))
            .cloned()
            .collect();
        covering.extend(uncovered.into_iter().map(Group::singleton));

        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
        let mut grouped = Vec::new();
        for pair in &self.pairs {
            let groups_a = covering_indices(&covering, &pair.a);
            let groups_b = covering_indices(&covering, &pair.b);
            for &ga in &groups_a {
                for &gb in &groups_b {
                    if ga == gb {
                        continue;
                    }
                    if seen.insert((ga.min(gb), ga.max(gb))) {
                        grouped.push(Pair::new(covering[ga].clone(), covering[gb].clone()));
                    }
                }
            }
        }
        grouped
    }

    /// Union of several subsets. Pairs and groups are de-duplicated, first occurrence wins.
    pub fn merge(parts: impl IntoIterator<Item = Subset<V>>) -> Self {
        let mut merged = Subset::new(BTreeSet::new(), Vec::new(), Vec::new());
        let mut seen_pairs = FxHashSet::default();
        let mut seen_groups = FxHashSet::default();
        for part in parts {
            merged.views.extend(part.views);
            merged.fixed_views.extend(part.fixed_views);
            for pair in part.pairs {
                if seen_pairs.insert(pair.clone()) {
                    merged.pairs.push(pair);
                }
            }
            for group in part.groups {
                if seen_groups.insert(group.clone()) {
                    merged.groups.push(group);
                }
            }
        }
        merged
    }
}

fn covering_indices<V: ViewToken>(covering: &[Group<V>], view: &V) -> Vec<usize> {
    covering
        .iter()
        .enumerate()
        .filter(|(_, g)| g.contains(view))
        .map(|(i, _)| i)
        .collect()
}

fn links_distinct_groups<V: ViewToken>(pair: &Pair<V>, groups: &[&Group<V>]) -> bool {
    groups.iter().enumerate().any(|(i, g1)| {
        g1.contains(&pair.a)
            && groups
                .iter()
                .enumerate()
                .any(|(j, g2)| i != j && g2.contains(&pair.b))
    })
}
