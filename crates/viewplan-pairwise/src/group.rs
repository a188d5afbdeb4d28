//! Groups: sets of views that share one rigid transform.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use viewplan_core::types::collections::FxHashSet;
use viewplan_core::ViewToken;

/// An unordered set of views registered as one rigid unit.
///
/// Members are kept sorted so that groups compare, hash and print
/// independently of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Group<V> {
    views: BTreeSet<V>,
}

impl<V: ViewToken> Group<V> {
    /// A group of `views`; repeated members collapse.
    pub fn new(views: impl IntoIterator<Item = V>) -> Self {
        Self {
            views: views.into_iter().collect(),
        }
    }

    /// A group holding exactly one view.
    pub fn singleton(view: V) -> Self {
        Self {
            views: BTreeSet::from([view]),
        }
    }

    /// True if `view` is a member.
    pub fn contains(&self, view: &V) -> bool {
        self.views.contains(view)
    }

    /// True if the two groups share at least one view.
    pub fn overlaps(&self, other: &Group<V>) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.views.iter().any(|v| large.contains(v))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// True if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.views.iter()
    }

    /// The member set.
    pub fn views(&self) -> &BTreeSet<V> {
        &self.views
    }

    /// All groups that contain `view`.
    pub fn member_of<'a>(view: &V, groups: &'a [Group<V>]) -> Vec<&'a Group<V>> {
        groups.iter().filter(|g| g.contains(view)).collect()
    }

    /// True if a single group contains both `a` and `b`.
    pub fn contains_both(a: &V, b: &V, groups: &[Group<V>]) -> bool {
        groups.iter().any(|g| g.contains(a) && g.contains(b))
    }

    /// Restrict every group to `views`.
    ///
    /// Members outside `views` are dropped, groups left empty are discarded and
    /// duplicate groups collapse onto their first occurrence.
    pub fn remove_non_existent_views(
        groups: impl IntoIterator<Item = Group<V>>,
        views: &[V],
    ) -> Vec<Group<V>> {
        let present: FxHashSet<&V> = views.iter().collect();
        let mut seen = FxHashSet::default();
        let mut cleaned = Vec::new();

        for group in groups {
            let before = group.len();
            let kept = Group::new(group.views.into_iter().filter(|v| present.contains(v)));
            if kept.len() < before {
                tracing::debug!(
                    dropped = before - kept.len(),
                    remaining = kept.len(),
                    "group members not in view list"
                );
            }
            if kept.is_empty() {
                continue;
            }
            if seen.insert(kept.clone()) {
                cleaned.push(kept);
            }
        }
        cleaned
    }
}

impl<V: ViewToken> FromIterator<V> for Group<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<V: fmt::Debug> fmt::Display for Group<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.views.iter()).finish()
    }
}
