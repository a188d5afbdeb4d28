//! Pairs: one candidate comparison between two views (or two groups).

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// An edge `(a, b)` of the comparison graph.
///
/// Orientation carries no meaning until `reorder_pairs` makes it canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pair<T> {
    pub a: T,
    pub b: T,
}

impl<T> Pair<T> {
    /// The pair `(a, b)`, orientation as given.
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// The same pair with endpoints exchanged.
    pub fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Swap into `a <= b` under `cmp`.
    pub fn canonical_by(self, mut cmp: impl FnMut(&T, &T) -> Ordering) -> Self {
        if cmp(&self.a, &self.b) == Ordering::Greater {
            self.swapped()
        } else {
            self
        }
    }
}

impl<T: Ord> Pair<T> {
    /// Swap into `a <= b`.
    pub fn canonical(self) -> Self {
        self.canonical_by(T::cmp)
    }
}

impl<T> From<(T, T)> for Pair<T> {
    fn from((a, b): (T, T)) -> Self {
        Self { a, b }
    }
}

impl<T: fmt::Display> fmt::Display for Pair<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Outcome of a pair filter: what survived and what was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairPartition<T> {
    pub kept: Vec<Pair<T>>,
    pub removed: Vec<Pair<T>>,
}

impl<T> PairPartition<T> {
    /// Split `pairs` by `keep`, preserving order on both sides.
    pub fn split(pairs: Vec<Pair<T>>, mut keep: impl FnMut(&Pair<T>) -> bool) -> Self {
        let (kept, removed) = pairs.into_iter().partition(|p| keep(p));
        Self { kept, removed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_orders_endpoints() {
        assert_eq!(Pair::new(3, 1).canonical(), Pair::new(1, 3));
        assert_eq!(Pair::new(1, 3).canonical(), Pair::new(1, 3));
        assert_eq!(
            Pair::new(1, 3).canonical_by(|x: &i32, y: &i32| y.cmp(x)),
            Pair::new(3, 1)
        );
    }

    #[test]
    fn split_keeps_order() {
        let parts = PairPartition::split(
            vec![Pair::new(1, 2), Pair::new(2, 3), Pair::new(3, 4)],
            |p| p.a != 2,
        );
        assert_eq!(parts.kept, vec![Pair::new(1, 2), Pair::new(3, 4)]);
        assert_eq!(parts.removed, vec![Pair::new(2, 3)]);
    }
}
